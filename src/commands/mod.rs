//! Commands module - Handlers behind the CLI surface
//!
//! Provides:
//! - report: display the dataset and its statistics (show/stats)
//! - edit: add and remove records with duplicate-year protection
//! - shell: interactive menu session over a dataset

pub mod edit;
pub mod report;
pub mod shell;

use thiserror::Error;

/// Domain errors for dataset edits. Distinct from I/O failures: these are
/// expected outcomes the user can correct by picking a different year.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("a record for year {0} already exists")]
    DuplicateYear(i32),

    #[error("no record exists for year {0}")]
    YearNotFound(i32),
}
