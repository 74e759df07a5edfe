//! The `gradebook report` command: re-render a saved JSON report.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::report::GradeReport;

use super::calculate::{print_report, write_chart};
use super::Settings;
use crate::OutputFormat;

pub fn execute(
    settings: &Settings,
    input: &Path,
    format: OutputFormat,
    chart: Option<Option<PathBuf>>,
) -> Result<()> {
    let report = GradeReport::load_json(input)?;
    tracing::debug!(
        "loaded report for {} created {}",
        report.data_file.display(),
        report.created_at
    );

    if format == OutputFormat::Text {
        println!(
            "Report of {} from {}",
            report.data_file.display(),
            report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    print_report(&report, format)?;

    if let Some(path) = chart {
        write_chart(settings, &report, path)?;
    }
    Ok(())
}
