//! Grade report document with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::gradebook::{Calculation, RejectedRow};
use crate::model::Record;
use crate::statistics::{summary_line, GradeDistribution, Stats};

/// A snapshot of one calculation, ready to render or archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Backing file the rows came from.
    pub data_file: PathBuf,
    /// Graded rows.
    pub records: Vec<Record>,
    /// Rows left out of the calculation.
    #[serde(default)]
    pub rejected: Vec<RejectedRow>,
    /// Summary statistics, absent when no rows were valid.
    pub stats: Option<Stats>,
    /// Grade counts.
    pub distribution: GradeDistribution,
}

impl GradeReport {
    /// Build a report from a finished calculation.
    pub fn from_calculation(calc: &Calculation, data_file: &Path) -> Self {
        Self {
            created_at: Utc::now(),
            data_file: data_file.to_path_buf(),
            records: calc.accepted.clone(),
            rejected: calc.rejected.clone(),
            stats: calc.stats,
            distribution: calc.distribution,
        }
    }

    /// Display line for the statistics, or the no-data message.
    pub fn summary(&self) -> String {
        summary_line(&self.stats.ok_or(StatsError::EmptyInput))
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::recompute;
    use crate::model::Grade;

    #[test]
    fn report_from_calculation() {
        let calc = recompute(&[Record::ungraded("Amy", "95"), Record::ungraded("Bo", "bad")]);
        let report = GradeReport::from_calculation(&calc, Path::new("students.csv"));
        assert_eq!(report.records, vec![Record::new("Amy", "95", "A")]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.distribution.count(Grade::A), 1);
        assert_eq!(report.stats.map(|s| s.count), Some(1));
        assert_eq!(report.summary(), calc.summary());
    }

    #[test]
    fn report_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let calc = recompute(&[Record::ungraded("Amy", "95"), Record::ungraded("Cy", "72")]);
        let report = GradeReport::from_calculation(&calc, Path::new("students.csv"));

        report.save_json(&path).unwrap();
        let loaded = GradeReport::load_json(&path).unwrap();

        assert_eq!(loaded.records, report.records);
        assert_eq!(loaded.distribution, report.distribution);
        assert_eq!(loaded.created_at, report.created_at);
    }

    #[test]
    fn load_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GradeReport::load_json(&dir.path().join("missing.json")).is_err());
    }
}
