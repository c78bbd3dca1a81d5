//! Plain-text summary of a grading run.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::GradeError;
use crate::output::{format_average, print_json};
use crate::record::EnrichedRecord;

pub const REPORT_TITLE: &str = "Summary Report";
pub const REPORT_SEPARATOR: &str = "====================";

/// A student singled out by their average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageStanding {
    pub name: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_students: usize,
    /// `None` only when no students were processed.
    pub best: Option<AverageStanding>,
    pub worst: Option<AverageStanding>,
}

impl SummaryReport {
    /// Scans `results` once. On equal averages the earlier record wins.
    pub fn from_results(results: &[EnrichedRecord]) -> Self {
        let mut best: Option<&EnrichedRecord> = None;
        let mut worst: Option<&EnrichedRecord> = None;

        for r in results {
            if best.is_none_or(|b| r.average > b.average) {
                best = Some(r);
            }
            if worst.is_none_or(|w| r.average < w.average) {
                worst = Some(r);
            }
        }

        let standing = |r: &EnrichedRecord| AverageStanding {
            name: r.name.clone(),
            average: r.average,
        };

        SummaryReport {
            total_students: results.len(),
            best: best.map(standing),
            worst: worst.map(standing),
        }
    }

    /// Report body, one newline-terminated line each.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_TITLE);
        out.push('\n');
        out.push_str(REPORT_SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Total Students Processed: {}\n", self.total_students));

        if let Some(best) = &self.best {
            out.push_str(&format!(
                "Highest Average Score: {} - {}\n",
                best.name,
                format_average(best.average)
            ));
        }
        if let Some(worst) = &self.worst {
            out.push_str(&format!(
                "Lowest Average Score: {} - {}\n",
                worst.name,
                format_average(worst.average)
            ));
        }

        out
    }
}

/// Writes the rendered report to `path`, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.display(), total = report.total_students))]
pub fn write_report(path: &Path, report: &SummaryReport) -> Result<(), GradeError> {
    if let Err(e) = print_json(report) {
        debug!(error = %e, "Could not encode summary as JSON");
    }

    let mut file = File::create(path).map_err(|e| GradeError::write(path, e))?;
    file.write_all(report.render().as_bytes())
        .map_err(|e| GradeError::write(path, e))?;
    file.flush().map_err(|e| GradeError::write(path, e))?;

    Ok(())
}
