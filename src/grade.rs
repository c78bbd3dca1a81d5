use serde::Serialize;
use std::fmt;

/// Letter classification of a single score or an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LetterGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a score (or an average of scores) into a letter grade.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 90  | A     |
/// | >= 80  | B     |
/// | >= 70  | C     |
/// | >= 60  | D     |
/// | >= 50  | E     |
/// | < 50   | F     |
pub fn letter_grade(score: f64) -> LetterGrade {
    match score {
        s if s >= 90.0 => LetterGrade::A,
        s if s >= 80.0 => LetterGrade::B,
        s if s >= 70.0 => LetterGrade::C,
        s if s >= 60.0 => LetterGrade::D,
        s if s >= 50.0 => LetterGrade::E,
        _ => LetterGrade::F,
    }
}
