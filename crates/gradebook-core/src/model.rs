//! Core data model types for gradebook.
//!
//! A [`Record`] is one row of the gradebook as it is stored on disk. A
//! [`Grade`] is the derived letter grade.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One student row: name, score as typed, and letter grade.
///
/// `score_text` keeps the original text so user formatting survives a
/// save/load cycle. `grade` is whatever was last written and may be stale
/// or empty until the row is recalculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Student name.
    pub name: String,
    /// Score exactly as entered.
    pub score_text: String,
    /// Letter grade, empty when not yet calculated.
    #[serde(default)]
    pub grade: String,
}

impl Record {
    /// Create a record with all three fields.
    pub fn new(
        name: impl Into<String>,
        score_text: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            score_text: score_text.into(),
            grade: grade.into(),
        }
    }

    /// Create a record that has not been graded yet.
    pub fn ungraded(name: impl Into<String>, score_text: impl Into<String>) -> Self {
        Self::new(name, score_text, "")
    }
}

/// Letter grade, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Every grade in chart order.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Position of this grade in [`Grade::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_display_and_parse() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.to_string(), "F");
        assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
        assert_eq!(" D ".parse::<Grade>().unwrap(), Grade::D);
        assert!("E".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_order_matches_chart_order() {
        for (i, g) in Grade::ALL.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
        assert!(Grade::A < Grade::F);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = Record::new("Jane Doe", "91.5", "A");
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_missing_grade_defaults_to_empty() {
        let back: Record = serde_json::from_str(r#"{"name":"Bo","score_text":"70"}"#).unwrap();
        assert_eq!(back, Record::ungraded("Bo", "70"));
    }
}
