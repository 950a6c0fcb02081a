//! Persistent storage for valid patient billing records.

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::RecordStore;

/// Default database file name inside the output directory.
pub const DEFAULT_DB_FILE: &str = "records.db";
