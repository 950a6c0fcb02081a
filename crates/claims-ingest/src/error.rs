//! Error types for record ingestion.
//!
//! Ingestion errors are fatal: a run that cannot assemble its records stops
//! before validation.

use std::path::PathBuf;

use claims_model::RuleKind;
use thiserror::Error;

/// Errors that can occur while extracting records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Table Errors ===
    /// Failed to parse the tabular extract.
    #[error("failed to parse table in {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The input contains no table (not even a header row).
    #[error("no table found in {path}")]
    NoTable { path: PathBuf },

    /// A row has fewer cells than a record needs.
    #[error("row {row} has {found} cells, expected at least {expected}")]
    RowArity {
        row: u64,
        found: usize,
        expected: usize,
    },
}

impl IngestError {
    /// Rule kind for table-shape failures; `None` for I/O failures.
    pub fn rule_kind(&self) -> Option<RuleKind> {
        match self {
            Self::FileNotFound { .. } | Self::FileRead { .. } => None,
            Self::CsvParse { .. } | Self::NoTable { .. } | Self::RowArity { .. } => {
                Some(RuleKind::Structure)
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
