use std::path::PathBuf;

use thiserror::Error;

/// Report output error.
#[derive(Debug, Error)]
pub enum ReportError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file couldn't be renamed into place.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
