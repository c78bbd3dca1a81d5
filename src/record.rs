//! Student records before and after grading.

use serde::{Serialize, Serializer};

use crate::grade::LetterGrade;
use crate::output::format_average;

/// Column names of the graded table, in output order.
pub const OUTPUT_HEADER: [&str; 15] = [
    "Name",
    "Art",
    "Chemistry",
    "Science",
    "English",
    "Math",
    "Average",
    "Highest_Score",
    "Lowest_Score",
    "Overall_Grade",
    "Art_Grade",
    "Chemistry_Grade",
    "Science_Grade",
    "English_Grade",
    "Math_Grade",
];

/// The five graded subjects, in input column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Art,
    Chemistry,
    Science,
    English,
    Math,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Art,
        Subject::Chemistry,
        Subject::Science,
        Subject::English,
        Subject::Math,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Art => "Art",
            Subject::Chemistry => "Chemistry",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::Math => "Math",
        }
    }
}

/// One validated input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    pub art: i64,
    pub chemistry: i64,
    pub science: i64,
    pub english: i64,
    pub math: i64,
}

impl StudentRecord {
    pub fn score(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Art => self.art,
            Subject::Chemistry => self.chemistry,
            Subject::Science => self.science,
            Subject::English => self.english,
            Subject::Math => self.math,
        }
    }

    /// Scores in subject order.
    pub fn scores(&self) -> [i64; 5] {
        Subject::ALL.map(|s| self.score(s))
    }
}

/// A student record with its derived statistics, laid out as one output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Art")]
    pub art: i64,
    #[serde(rename = "Chemistry")]
    pub chemistry: i64,
    #[serde(rename = "Science")]
    pub science: i64,
    #[serde(rename = "English")]
    pub english: i64,
    #[serde(rename = "Math")]
    pub math: i64,

    #[serde(rename = "Average", serialize_with = "serialize_average")]
    pub average: f64,
    #[serde(rename = "Highest_Score")]
    pub highest_score: i64,
    #[serde(rename = "Lowest_Score")]
    pub lowest_score: i64,
    #[serde(rename = "Overall_Grade")]
    pub overall_grade: LetterGrade,

    #[serde(rename = "Art_Grade")]
    pub art_grade: LetterGrade,
    #[serde(rename = "Chemistry_Grade")]
    pub chemistry_grade: LetterGrade,
    #[serde(rename = "Science_Grade")]
    pub science_grade: LetterGrade,
    #[serde(rename = "English_Grade")]
    pub english_grade: LetterGrade,
    #[serde(rename = "Math_Grade")]
    pub math_grade: LetterGrade,
}

fn serialize_average<S: Serializer>(average: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_average(*average))
}
