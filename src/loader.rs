//! Reads the student score table.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::GradeError;
use crate::record::{StudentRecord, Subject};

/// Name plus five subject scores.
pub const REQUIRED_FIELDS: usize = 6;

/// Loads every complete row of the table at `path`, in file order.
///
/// The first row is a header and is skipped unchecked. Rows with fewer than
/// [`REQUIRED_FIELDS`] fields are logged and dropped.
///
/// # Errors
///
/// - [`GradeError::NotFound`] if `path` is not a readable file.
/// - [`GradeError::MalformedData`] if a complete row has an empty name or a
///   score that is not an integer.
/// - [`GradeError::Read`] if the underlying CSV cannot be decoded.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_students(path: &Path) -> Result<Vec<StudentRecord>, GradeError> {
    let file = open_source(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut students = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = result.map_err(|source| GradeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if row.len() < REQUIRED_FIELDS {
            let fields: Vec<&str> = row.iter().collect();
            warn!(row = ?fields, "Incomplete data in row");
            skipped += 1;
            continue;
        }

        students.push(parse_row(&row)?);
    }

    debug!(loaded = students.len(), skipped, "Finished reading student data");
    Ok(students)
}

fn open_source(path: &Path) -> Result<File, GradeError> {
    if !path.is_file() {
        return Err(GradeError::NotFound {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    File::open(path).map_err(|source| GradeError::NotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds a record from a row that already has all required fields.
fn parse_row(row: &StringRecord) -> Result<StudentRecord, GradeError> {
    let malformed = |detail: String| GradeError::MalformedData {
        row: row.iter().map(str::to_string).collect(),
        detail,
    };

    let name = &row[0];
    if name.is_empty() {
        return Err(malformed("empty name field".to_string()));
    }

    let mut scores = [0i64; 5];
    for (i, subject) in Subject::ALL.into_iter().enumerate() {
        scores[i] = row[i + 1]
            .trim()
            .parse::<i64>()
            .map_err(|e| malformed(format!("{} score: {e}", subject.name())))?;
    }

    let [art, chemistry, science, english, math] = scores;
    Ok(StudentRecord {
        name: name.to_string(),
        art,
        chemistry,
        science,
        english,
        math,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_students(Path::new("/definitely/not/here/students.csv"));
        assert!(matches!(result, Err(GradeError::NotFound { .. })));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_students(dir.path());
        assert!(matches!(result, Err(GradeError::NotFound { .. })));
    }

    #[test]
    fn test_header_is_skipped_without_validation() {
        let file = table("this,header,is,not,numbers,at all\nAlice,90,80,70,60,50\n");
        let students = load_students(file.path()).unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].scores(), [90, 80, 70, 60, 50]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let file = table(
            "Name,Art,Chemistry,Science,English,Math\n\
             Alice,90,80,70,60,50\n\
             Bob,1,2,3\n\
             Cara,55,65,75,85,95\n",
        );
        let students = load_students(file.path()).unwrap();

        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Cara"]);
    }

    #[test]
    fn test_non_integer_score_is_fatal() {
        let file = table(
            "Name,Art,Chemistry,Science,English,Math\n\
             Alice,90,80,70,60,50\n\
             Bob,abc,80,70,60,50\n",
        );
        let err = load_students(file.path()).unwrap_err();

        match err {
            GradeError::MalformedData { row, detail } => {
                assert_eq!(row[0], "Bob");
                assert_eq!(row[1], "abc");
                assert_eq!(detail, "Art score: invalid digit found in string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_before_bad_row_still_aborts() {
        let file = table("h\nBob,1\nCat,1,2,3,4,x\n");
        let result = load_students(file.path());
        assert!(matches!(result, Err(GradeError::MalformedData { .. })));
    }

    #[test]
    fn test_detail_names_the_bad_subject() {
        let file = table("h\n\nBob,90,80,70,60,ninety\n");
        let err = load_students(file.path()).unwrap_err();
        assert!(err.to_string().contains("Math score:"));
    }

    #[test]
    fn test_score_beyond_i64_is_malformed() {
        let file = table("h\nBob,99999999999999999999,80,70,60,50\n");
        let err = load_students(file.path()).unwrap_err();
        assert!(err.to_string().contains("Art score: number too large"));
    }

    #[test]
    fn test_decimal_score_is_malformed() {
        let file = table("h\nBob,90.5,80,70,60,50\n");
        let result = load_students(file.path());
        assert!(matches!(result, Err(GradeError::MalformedData { .. })));
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let file = table("h\n,90,80,70,60,50\n");
        let err = load_students(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty name field"));
    }

    #[test]
    fn test_scores_tolerate_surrounding_whitespace() {
        let file = table("h\nAlice, 90 ,80,70,60, 50\n");
        let students = load_students(file.path()).unwrap();
        assert_eq!(students[0].art, 90);
        assert_eq!(students[0].math, 50);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let file = table("h\nAlice,90,80,70,60,50,extra,more\n");
        let students = load_students(file.path()).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].math, 50);
    }

    #[test]
    fn test_header_only_and_empty_file() {
        let file = table("Name,Art,Chemistry,Science,English,Math\n");
        assert!(load_students(file.path()).unwrap().is_empty());

        let file = table("");
        assert!(load_students(file.path()).unwrap().is_empty());
    }
}
