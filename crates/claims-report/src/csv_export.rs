//! Valid-record CSV export.

use std::io::{self, Write};
use std::path::Path;

use claims_model::{FieldId, Record};

use crate::error::Result;
use crate::io::write_atomic;

/// Column headings, in record column order.
pub fn column_headings() -> Vec<&'static str> {
    FieldId::all().iter().map(FieldId::display_name).collect()
}

/// Write the header row and one row per record. Absent fields are empty.
pub fn write_valid_csv<W: Write>(records: &[Record], writer: W) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(column_headings())?;
    for record in records {
        writer.write_record(record.values().map(|value| value.unwrap_or_default()))?;
    }
    writer.flush()
}

pub fn write_valid_csv_file(records: &[Record], path: &Path) -> Result<()> {
    write_atomic(path, |out| write_valid_csv(records, out))?;
    tracing::info!(path = %path.display(), record_count = records.len(), "wrote valid records");
    Ok(())
}
