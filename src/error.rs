//! Error type shared by every stage of the grading run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("the file '{}' does not exist", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row had every field present but one of them could not be used.
    #[error("invalid data in row {row:?}: {detail}")]
    MalformedData {
        row: Vec<String>,
        detail: String,
    },

    #[error("failed to write to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GradeError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        GradeError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_includes_row_and_detail() {
        let err = GradeError::MalformedData {
            row: vec!["Bob".into(), "abc".into()],
            detail: "invalid digit found in string".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Bob\", \"abc\""));
        assert!(msg.contains("invalid digit found in string"));
    }

    #[test]
    fn test_write_helper_converts_csv_error() {
        let csv_err = csv::Error::from(io::Error::other("disk full"));
        let err = GradeError::write("out.csv", csv_err);
        assert!(matches!(err, GradeError::Write { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}
