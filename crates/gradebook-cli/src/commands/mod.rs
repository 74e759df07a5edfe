//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::{Gradebook, RecordStore};

pub mod add;
pub mod calculate;
pub mod clear;
pub mod init;
pub mod list;
pub mod report;
pub mod stats;

/// Configuration after applying command-line overrides.
pub struct Settings {
    pub config: GradebookConfig,
}

impl Settings {
    pub fn resolve(config_path: Option<PathBuf>, data_file: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path.as_deref())?;
        if let Some(path) = data_file {
            config.data_file = path;
        }
        tracing::debug!("data file: {}", config.data_file.display());
        Ok(Self { config })
    }

    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    pub fn open_store(&self) -> Result<RecordStore> {
        RecordStore::open(self.data_file())
            .with_context(|| format!("failed to open record file {}", self.data_file().display()))
    }

    pub fn open_gradebook(&self) -> Result<Gradebook> {
        Ok(Gradebook::new(self.open_store()?))
    }
}
