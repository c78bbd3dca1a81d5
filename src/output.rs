//! Output formatting and persistence for graded results.
//!
//! Supports debug dumps, JSON logging, and writing the graded CSV table.

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::GradeError;
use crate::record::EnrichedRecord;

/// Renders an average the way the graded table and report show it.
///
/// Whole numbers keep one decimal place (`70.0`); anything else uses the
/// shortest form that round-trips (`72.4`).
pub fn format_average(average: f64) -> String {
    if average.is_finite() && average.fract() == 0.0 {
        format!("{average:.1}")
    } else {
        average.to_string()
    }
}

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    debug!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes the graded table to `path`, header first.
///
/// Returns the number of data rows written. An empty `results` slice writes
/// nothing and leaves `path` untouched.
#[tracing::instrument(skip_all, fields(path = %path.display(), rows = results.len()))]
pub fn write_results(path: &Path, results: &[EnrichedRecord]) -> Result<usize, GradeError> {
    if results.is_empty() {
        info!("No results to write.");
        return Ok(0);
    }

    let file = File::create(path).map_err(|e| GradeError::write(path, e))?;

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in results {
        writer
            .serialize(record)
            .map_err(|e| GradeError::write(path, e))?;
    }
    writer.flush().map_err(|e| GradeError::write(path, e))?;

    debug!("Graded table flushed");
    Ok(results.len())
}
