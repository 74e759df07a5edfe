//! The `gradebook add` command.

use anyhow::{Context, Result};

use gradebook_core::store::unrepresentable_char;
use gradebook_core::validate::check_row;
use gradebook_core::Record;

use super::Settings;

pub fn execute(settings: &Settings, name: String, score: String) -> Result<()> {
    for (field, text) in [("name", &name), ("score", &score)] {
        if let Some(found) = unrepresentable_char(text) {
            anyhow::bail!("{field} cannot contain a {found}");
        }
    }

    let store = settings.open_store()?;
    let issue = check_row(name.trim(), score.trim()).err();

    store
        .append(Record::ungraded(name.as_str(), score.as_str()))
        .with_context(|| format!("failed to add {name}"))?;
    println!("Added {name} ({score})");

    if let Some(issue) = issue {
        println!("Note: {issue}; this row will be dropped by `gradebook calculate`.");
    }

    Ok(())
}
