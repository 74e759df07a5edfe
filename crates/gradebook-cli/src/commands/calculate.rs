//! The `gradebook calculate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::report::GradeReport;
use gradebook_report::html::write_html_report;
use gradebook_report::text::{render_distribution, DEFAULT_BAR_WIDTH};

use super::Settings;
use crate::OutputFormat;

pub fn execute(
    settings: &Settings,
    format: OutputFormat,
    chart: Option<Option<PathBuf>>,
    save_report: Option<PathBuf>,
) -> Result<()> {
    let gradebook = settings.open_gradebook()?;
    let calc = gradebook.calculate_stored()?;
    let report = GradeReport::from_calculation(&calc, settings.data_file());

    print_report(&report, format)?;
    if format == OutputFormat::Text {
        println!(
            "Saved {} record(s) to {}",
            calc.accepted.len(),
            settings.data_file().display()
        );
    }

    if let Some(path) = save_report {
        report.save_json(&path)?;
        eprintln!("JSON report: {}", path.display());
    }

    if let Some(path) = chart {
        write_chart(settings, &report, path)?;
    }

    Ok(())
}

/// Write the HTML report to `path`, or to a timestamped file in the report dir.
pub fn write_chart(
    settings: &Settings,
    report: &GradeReport,
    path: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| default_chart_path(&settings.config.report_dir, report));
    write_html_report(report, &path)?;
    eprintln!("HTML report: {}", path.display());
    Ok(path)
}

fn default_chart_path(report_dir: &Path, report: &GradeReport) -> PathBuf {
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
    report_dir.join(format!("grades-{timestamp}.html"))
}

/// Print a report in the requested format.
pub fn print_report(report: &GradeReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            for r in &report.rejected {
                println!(
                    "Skipped row {} ({:?}, {:?}): {}",
                    r.index + 1,
                    r.record.name,
                    r.record.score_text,
                    r.issue
                );
            }
            if !report.records.is_empty() {
                println!("{}", super::list::record_table(&report.records));
            }
            println!("{}", report.summary());
            println!("\nGrade Distribution");
            print!("{}", render_distribution(&report.distribution, DEFAULT_BAR_WIDTH));
        }
    }
    Ok(())
}
