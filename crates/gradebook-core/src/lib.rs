//! gradebook-core - Record store, grading, validation, and statistics.
//!
//! This crate holds everything the gradebook does that is not presentation:
//! the flat-file record store, the letter-grade thresholds, input validation,
//! summary statistics, and the recompute workflow that ties them together.

pub mod config;
pub mod error;
pub mod gradebook;
pub mod grading;
pub mod model;
pub mod report;
pub mod statistics;
pub mod store;
pub mod validate;

pub use error::{StatsError, StoreError};
pub use gradebook::{recompute, Calculation, Gradebook, RejectedRow};
pub use grading::classify;
pub use model::{Grade, Record};
pub use statistics::{compute, GradeDistribution, Stats};
pub use store::RecordStore;
pub use validate::{is_valid_name, is_valid_score, RowIssue};
