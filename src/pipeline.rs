//! End-to-end grading run: load, grade, write the table, write the report.

use std::path::PathBuf;

use tracing::info;

use crate::error::GradeError;
use crate::loader::load_students;
use crate::output::{print_pretty, write_results};
use crate::report::{SummaryReport, write_report};
use crate::stats::project;

/// Paths for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: PathBuf,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_written: usize,
    pub report: SummaryReport,
}

/// Runs every stage in order, stopping at the first fatal error.
///
/// Nothing is written unless the whole input loaded cleanly.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn run(config: &RunConfig) -> Result<RunSummary, GradeError> {
    let students = load_students(&config.input)?;
    let results = project(&students);

    let rows_written = write_results(&config.output, &results)?;
    if rows_written > 0 {
        info!(
            "Results successfully written to {}",
            config.output.display()
        );
    }

    let report = SummaryReport::from_results(&results);
    print_pretty(&report);
    write_report(&config.report, &report)?;
    info!(
        "Summary report successfully written to {}",
        config.report.display()
    );

    Ok(RunSummary {
        rows_written,
        report,
    })
}
