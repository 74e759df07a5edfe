//! Summary statistics and grade distribution.
//!
//! Everything here is a full recomputation over the slice it is given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::model::Grade;

/// Message shown in place of statistics when there is nothing to summarise.
pub const NO_DATA_MESSAGE: &str = "No valid scores to calculate.";

/// Descriptive statistics over a set of scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of scores.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value, or the average of the two middle values.
    pub median: f64,
    /// Highest score.
    pub high: f64,
    /// Lowest score.
    pub low: f64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Count: {}, Avg: {:.2}, Med: {:.2}, High: {:.2}, Low: {:.2}",
            self.count, self.mean, self.median, self.high, self.low
        )
    }
}

/// Compute count, mean, median, high, and low.
///
/// Returns [`StatsError::EmptyInput`] for an empty slice.
pub fn compute(scores: &[f64]) -> Result<Stats, StatsError> {
    if scores.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(Stats {
        count,
        mean,
        median,
        high: sorted[count - 1],
        low: sorted[0],
    })
}

/// Render a stats result as a single display line, using
/// [`NO_DATA_MESSAGE`] when there was no input.
pub fn summary_line(result: &Result<Stats, StatsError>) -> String {
    match result {
        Ok(stats) => stats.to_string(),
        Err(StatsError::EmptyInput) => NO_DATA_MESSAGE.to_string(),
    }
}

/// How many students received each grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDistribution {
    counts: [usize; 5],
}

impl GradeDistribution {
    /// Count the given grades.
    pub fn from_grades(grades: &[Grade]) -> Self {
        let mut dist = Self::default();
        for g in grades {
            dist.counts[g.index()] += 1;
        }
        dist
    }

    /// Number of students with `grade`.
    pub fn count(&self, grade: Grade) -> usize {
        self.counts[grade.index()]
    }

    /// `(grade, count)` pairs in A, B, C, D, F order, zeros included.
    pub fn counts(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(move |&g| (g, self.count(g)))
    }

    /// Total number of grades counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single bucket, used to scale charts.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
