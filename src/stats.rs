use tracing::debug;

use crate::grade::letter_grade;
use crate::record::{EnrichedRecord, StudentRecord};
use crate::utility::mean;

/// Mean of the five subject scores, using real division.
pub fn average(record: &StudentRecord) -> f64 {
    let scores = record.scores().map(|s| s as f64);
    mean(&scores)
}

/// Highest and lowest of the five subject scores.
pub fn highest_and_lowest(record: &StudentRecord) -> (i64, i64) {
    let scores = record.scores();
    let mut highest = scores[0];
    let mut lowest = scores[0];

    for &s in &scores[1..] {
        highest = highest.max(s);
        lowest = lowest.min(s);
    }

    (highest, lowest)
}

impl EnrichedRecord {
    pub fn from_record(record: &StudentRecord) -> Self {
        let average = average(record);
        let (highest_score, lowest_score) = highest_and_lowest(record);

        EnrichedRecord {
            name: record.name.clone(),
            art: record.art,
            chemistry: record.chemistry,
            science: record.science,
            english: record.english,
            math: record.math,
            average,
            highest_score,
            lowest_score,
            overall_grade: letter_grade(average),
            art_grade: letter_grade(record.art as f64),
            chemistry_grade: letter_grade(record.chemistry as f64),
            science_grade: letter_grade(record.science as f64),
            english_grade: letter_grade(record.english as f64),
            math_grade: letter_grade(record.math as f64),
        }
    }
}

/// Grades every loaded record, keeping input order.
pub fn project(records: &[StudentRecord]) -> Vec<EnrichedRecord> {
    let results: Vec<_> = records.iter().map(EnrichedRecord::from_record).collect();
    debug!(count = results.len(), "Projected student results");
    results
}
