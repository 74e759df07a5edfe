//! Error types for the record store and the statistics calculator.
//!
//! Row validation failures are not errors in this sense; they live in
//! [`crate::validate::RowIssue`] and are reported per row.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::store::RecordStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be created, read, or written.
    #[error("failed to {action} record file {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field holds a character the one-line-per-record format cannot store.
    #[error("record {} has a {found} in its {field}, which the record file cannot store", .index + 1)]
    UnrepresentableField {
        /// Zero-based position of the record in the batch.
        index: usize,
        field: &'static str,
        found: &'static str,
    },
}

impl StoreError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by [`crate::statistics::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// There were no scores to summarise.
    #[error("no valid scores to calculate")]
    EmptyInput,
}
