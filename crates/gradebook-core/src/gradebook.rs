//! The recalculation workflow.
//!
//! Validates each row, grades the valid ones, saves only those back to the
//! store, and summarises them. Invalid rows are reported and then dropped
//! from persistence.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::grading::classify;
use crate::model::{Grade, Record};
use crate::statistics::{compute, summary_line, GradeDistribution, Stats};
use crate::store::RecordStore;
use crate::validate::{check_row, RowIssue};

/// A row that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// Zero-based position of the row in the input.
    pub index: usize,
    /// The row as it was given.
    pub record: Record,
    /// What was wrong with it.
    pub issue: RowIssue,
}

/// Outcome of recalculating a set of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Valid rows with fresh grades, in input order.
    pub accepted: Vec<Record>,
    /// Rows left out, in input order.
    pub rejected: Vec<RejectedRow>,
    /// Parsed scores of the accepted rows.
    pub scores: Vec<f64>,
    /// Grades of the accepted rows.
    pub grades: Vec<Grade>,
    /// Statistics over `scores`, `None` when nothing was accepted.
    pub stats: Option<Stats>,
    /// Grade counts over `grades`.
    pub distribution: GradeDistribution,
}

impl Calculation {
    /// Statistics as a result, with [`StatsError::EmptyInput`] for no data.
    pub fn stats_result(&self) -> Result<Stats, StatsError> {
        self.stats.ok_or(StatsError::EmptyInput)
    }

    /// Display line for the statistics.
    pub fn summary(&self) -> String {
        summary_line(&self.stats_result())
    }
}

/// Validate and grade `rows` without touching storage.
pub fn recompute(rows: &[Record]) -> Calculation {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    let mut scores = Vec::new();
    let mut grades = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let name = row.name.trim();
        let score_text = row.score_text.trim();

        match check_row(name, score_text) {
            Ok(score) => {
                let grade = classify(score);
                scores.push(score);
                grades.push(grade);
                accepted.push(Record::new(name, score_text, grade.as_str()));
            }
            Err(issue) => {
                tracing::debug!("row {index} rejected: {issue}");
                rejected.push(RejectedRow {
                    index,
                    record: row.clone(),
                    issue,
                });
            }
        }
    }

    let stats = compute(&scores).ok();
    let distribution = GradeDistribution::from_grades(&grades);

    Calculation {
        accepted,
        rejected,
        scores,
        grades,
        stats,
        distribution,
    }
}

/// A record store plus the operations the presentation layer drives.
#[derive(Debug, Clone)]
pub struct Gradebook {
    store: RecordStore,
}

impl Gradebook {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Recalculate `rows` and replace the stored rows with the valid ones.
    pub fn calculate(&self, rows: &[Record]) -> Result<Calculation> {
        let calc = recompute(rows);
        self.store.save(&calc.accepted)?;
        if !calc.rejected.is_empty() {
            tracing::info!(
                "dropped {} invalid row(s) from {}",
                calc.rejected.len(),
                self.store.path().display()
            );
        }
        Ok(calc)
    }

    /// Recalculate whatever is currently stored.
    pub fn calculate_stored(&self) -> Result<Calculation> {
        let rows = self.store.load()?;
        self.calculate(&rows)
    }

    /// Recalculate the stored rows without saving anything.
    pub fn preview(&self) -> Result<Calculation> {
        let rows = self.store.load()?;
        Ok(recompute(&rows))
    }
}
