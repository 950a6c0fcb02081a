//! Validation reports.
//!
//! [`ReportSummary`] aggregates a batch result; the writers render it (plus
//! the invalid records) as a text report, a JSON report, and a CSV of the
//! valid records.

pub mod csv_export;
pub mod error;
mod io;
pub mod json;
pub mod summary;
pub mod text;

pub use csv_export::{column_headings, write_valid_csv, write_valid_csv_file};
pub use error::{ReportError, Result};
pub use json::{write_json_report, write_json_report_file};
pub use summary::{ReportSummary, SummaryCounts, percent_valid};
pub use text::{write_text_report, write_text_report_file};

/// File name of the valid-record export.
pub const VALID_CSV_FILE: &str = "valid_records.csv";
/// File name of the text report.
pub const TEXT_REPORT_FILE: &str = "error_report.txt";
/// File name of the JSON report.
pub const JSON_REPORT_FILE: &str = "error_report.json";
