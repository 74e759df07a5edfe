//! The `gradebook list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::Record;

use super::Settings;
use crate::OutputFormat;

pub fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let records = settings.open_store()?.load()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No students recorded.");
            } else {
                println!("{}", record_table(&records));
            }
        }
    }

    Ok(())
}

/// Rows as a numbered table.
pub fn record_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Student Name", "Score", "Grade"]);

    for (i, r) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.name),
            Cell::new(&r.score_text),
            Cell::new(&r.grade),
        ]);
    }

    table
}
