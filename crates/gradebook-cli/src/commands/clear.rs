//! The `gradebook clear` command.

use anyhow::Result;

use super::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    settings.open_store()?.clear()?;
    println!("Cleared {}", settings.data_file().display());
    Ok(())
}
