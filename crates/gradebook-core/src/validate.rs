//! Name and score validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 100.0;

/// Why a row was left out of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowIssue {
    #[error("invalid name (must contain letters only)")]
    InvalidName,
    #[error("invalid score (0-100 expected)")]
    InvalidScore,
}

/// Returns `true` if `text` is non-empty and made only of ASCII letters and
/// whitespace.
pub fn is_valid_name(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Parse a score, returning it only if it lies in `[0, 100]`.
///
/// Surrounding whitespace is ignored. NaN and infinities fail the range check.
pub fn parse_score(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (MIN_SCORE..=MAX_SCORE).contains(&value).then_some(value)
}

/// Returns `true` if `text` parses as a number in `[0, 100]`.
pub fn is_valid_score(text: &str) -> bool {
    parse_score(text).is_some()
}

/// Check one row. The name is checked before the score, so a row with both
/// fields wrong reports [`RowIssue::InvalidName`].
pub fn check_row(name: &str, score_text: &str) -> Result<f64, RowIssue> {
    if !is_valid_name(name) {
        return Err(RowIssue::InvalidName);
    }
    parse_score(score_text).ok_or(RowIssue::InvalidScore)
}
