//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "gradebook.toml";

/// Environment variable that overrides [`GradebookConfig::data_file`].
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Backing file for student records.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Directory HTML reports are written to when no explicit path is given.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("students.csv")
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("gradebook-reports")
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            report_dir: default_report_dir(),
        }
    }
}

impl GradebookConfig {
    /// Apply environment overrides. `lookup` is `std::env::var` in practice.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            tracing::debug!("{DATA_FILE_ENV} overrides data file: {path}");
            self.data_file = PathBuf::from(path);
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable override: `GRADEBOOK_DATA_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
