//! CSV table extracts.
//!
//! The first row holds the column headings and is skipped; each following
//! row becomes one record.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use claims_model::Record;
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::source::{RecordSource, row_to_record};

/// Reads records from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    path: PathBuf,
}

impl CsvTableSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvTableSource {
    fn extract_records(&mut self) -> Result<Vec<Record>> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                IngestError::FileRead {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let records = read_csv_records(file, &self.path)?;
        info!(
            path = %self.path.display(),
            record_count = records.len(),
            "records extracted"
        );
        Ok(records)
    }
}

/// Read records from CSV text. `path` is only used in error messages.
pub fn read_csv_records<R: Read>(reader: R, path: &Path) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = reader.records();
    match rows.next() {
        Some(Ok(header)) => {
            debug!(columns = header.len(), "skipping header row");
        }
        Some(Err(source)) => return Err(csv_error(path, source)),
        None => {
            return Err(IngestError::NoTable {
                path: path.to_path_buf(),
            });
        }
    }

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|source| csv_error(path, source))?;
        let line = row
            .position()
            .map_or(records.len() as u64 + 2, csv::Position::line);
        let cells = row.iter().map(|cell| Some(cell.to_string())).collect();
        records.push(row_to_record(line, cells)?);
    }
    Ok(records)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}
