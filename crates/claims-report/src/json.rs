//! JSON report.

use std::io::{self, Write};
use std::path::Path;

use claims_validate::InvalidRecord;
use serde::Serialize;

use crate::error::Result;
use crate::io::write_atomic;
use crate::summary::ReportSummary;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a ReportSummary,
    invalid_records: &'a [InvalidRecord],
}

/// Write the summary object plus an `invalidRecords` array, pretty-printed.
pub fn write_json_report<W: Write>(
    summary: &ReportSummary,
    invalid_records: &[InvalidRecord],
    mut out: W,
) -> io::Result<()> {
    let report = JsonReport {
        summary,
        invalid_records,
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)
}

pub fn write_json_report_file(
    summary: &ReportSummary,
    invalid_records: &[InvalidRecord],
    path: &Path,
) -> Result<()> {
    write_atomic(path, |out| write_json_report(summary, invalid_records, out))?;
    tracing::info!(path = %path.display(), "wrote json report");
    Ok(())
}
