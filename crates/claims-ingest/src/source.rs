//! Record source boundary.

use claims_model::{FIELD_COUNT, Record};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Anything that can supply an ordered sequence of records.
///
/// An input with a table but no data rows yields an empty sequence, not an
/// error.
pub trait RecordSource {
    fn extract_records(&mut self) -> Result<Vec<Record>>;
}

impl RecordSource for Vec<Record> {
    fn extract_records(&mut self) -> Result<Vec<Record>> {
        Ok(std::mem::take(self))
    }
}

/// Convert tabulated data rows (header already removed) into records.
///
/// The first five cells map to the record fields in column order; empty or
/// null cells become absent fields and extra cells are ignored.
pub fn rows_to_records<I>(rows: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = Vec<Option<String>>>,
{
    rows.into_iter()
        .enumerate()
        .map(|(idx, cells)| row_to_record(idx as u64 + 1, cells))
        .collect()
}

/// Convert one row; `row` is only used for error reporting.
pub(crate) fn row_to_record(row: u64, cells: Vec<Option<String>>) -> Result<Record> {
    if cells.len() < FIELD_COUNT {
        return Err(IngestError::RowArity {
            row,
            found: cells.len(),
            expected: FIELD_COUNT,
        });
    }
    if cells.len() > FIELD_COUNT {
        debug!(
            row,
            extra = cells.len() - FIELD_COUNT,
            "ignoring extra cells"
        );
    }

    let mut values = cells
        .into_iter()
        .take(FIELD_COUNT)
        .map(|cell| cell.filter(|value| !value.is_empty()));
    let mut next = || values.next().flatten();
    Ok(Record::new(next(), next(), next(), next(), next()))
}
