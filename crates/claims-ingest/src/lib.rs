//! Record ingestion.
//!
//! Turns a tabulated extract into [`Record`]s for the validator. Only the
//! shape of the table is checked here; field values stay raw.

pub mod csv_table;
pub mod error;
pub mod source;

pub use claims_model::Record;
pub use csv_table::{CsvTableSource, read_csv_records};
pub use error::{IngestError, Result};
pub use source::{RecordSource, rows_to_records};
