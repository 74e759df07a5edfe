//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::config::LOCAL_CONFIG_FILE;

use super::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let config_path = Path::new(LOCAL_CONFIG_FILE);
    if config_path.exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(config_path, SAMPLE_CONFIG)?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    let data_file = settings.data_file();
    if data_file.exists() {
        println!("{} already exists, skipping.", data_file.display());
    } else {
        settings.open_store()?;
        println!("Created {}", data_file.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook add --name \"Jane Doe\" --score 91");
    println!("  2. Run: gradebook calculate --chart");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Comma-separated record file: name,score,grade per line.
data_file = "students.csv"

# Where `gradebook calculate --chart` writes HTML reports.
report_dir = "gradebook-reports"
"#;
