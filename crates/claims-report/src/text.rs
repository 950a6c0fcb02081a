//! Plain-text error report.

use std::io::{self, Write};
use std::path::Path;

use claims_model::display_name_for_key;
use claims_validate::InvalidRecord;

use crate::error::Result;
use crate::io::write_atomic;
use crate::summary::ReportSummary;

/// Placeholder for an invalid record without a patient id.
const MISSING_ID: &str = "(missing)";

/// Write the text report: summary, issue tables, then each invalid record.
pub fn write_text_report<W: Write>(
    summary: &ReportSummary,
    invalid_records: &[InvalidRecord],
    mut out: W,
) -> io::Result<()> {
    let counts = &summary.summary;
    heading(&mut out, "Summary")?;
    writeln!(
        out,
        "Generated: {}",
        counts.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Total Records Processed: {}", counts.total_records_processed)?;
    writeln!(out, "Valid Records: {}", counts.valid_records)?;
    writeln!(out, "Invalid Records: {}", counts.invalid_records)?;
    writeln!(out, "Percent of records valid: {}", summary.percent_label())?;
    writeln!(out)?;

    heading(&mut out, "Validation Issues")?;
    for (rule, count) in &summary.validation_issues {
        writeln!(out, "{}: {count}", display_name_for_key(rule.as_str()))?;
    }
    writeln!(out)?;

    heading(&mut out, "Fields With Issues")?;
    for (field, count) in &summary.fields_with_issues {
        writeln!(out, "{}: {count}", display_name_for_key(field.as_str()))?;
    }
    writeln!(out)?;

    heading(&mut out, "Invalid Records")?;
    for invalid in invalid_records {
        let patient_id = invalid.record.patient_id().unwrap_or(MISSING_ID);
        writeln!(out, "Patient ID: {patient_id}")?;
        for error in &invalid.errors {
            writeln!(out, "  - {}", error.message)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_text_report_file(
    summary: &ReportSummary,
    invalid_records: &[InvalidRecord],
    path: &Path,
) -> Result<()> {
    write_atomic(path, |out| write_text_report(summary, invalid_records, out))?;
    tracing::info!(path = %path.display(), "wrote text report");
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len()))
}
