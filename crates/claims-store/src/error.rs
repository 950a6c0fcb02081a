//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Record store error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or initialised.
    #[error("failed to open record store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed.
    #[error("record store {operation} failed: {source}")]
    Sql {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl StoreError {
    pub(crate) fn sql(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Sql { operation, source }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
