//! The `gradebook stats` command.

use anyhow::Result;

use gradebook_core::report::GradeReport;

use super::calculate::print_report;
use super::Settings;
use crate::OutputFormat;

pub fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let calc = settings.open_gradebook()?.preview()?;
    let report = GradeReport::from_calculation(&calc, settings.data_file());
    print_report(&report, format)
}
