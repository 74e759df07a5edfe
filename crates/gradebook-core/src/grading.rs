//! Letter-grade thresholds.
//!
//! | Score  | Grade |
//! |--------|-------|
//! | >= 90  | A     |
//! | >= 80  | B     |
//! | >= 70  | C     |
//! | >= 60  | D     |
//! | < 60   | F     |

use crate::model::Grade;

/// Map a numeric score to its letter grade.
///
/// No range check is done here: anything below 60 (including negatives and
/// NaN) is an F and anything at or above 90 is an A.
pub fn classify(score: f64) -> Grade {
    match score {
        s if s >= 90.0 => Grade::A,
        s if s >= 80.0 => Grade::B,
        s if s >= 70.0 => Grade::C,
        s if s >= 60.0 => Grade::D,
        _ => Grade::F,
    }
}

/// Classify every score in order.
pub fn classify_all(scores: &[f64]) -> Vec<Grade> {
    scores.iter().map(|&s| classify(s)).collect()
}
