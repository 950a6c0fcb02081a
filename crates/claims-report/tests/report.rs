use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use claims_model::Record;
use claims_report::{
    JSON_REPORT_FILE, ReportSummary, TEXT_REPORT_FILE, VALID_CSV_FILE, write_json_report,
    write_json_report_file, write_text_report, write_text_report_file, write_valid_csv_file,
};
use claims_validate::{BatchProcessor, BatchResult, Validator};
use tempfile::TempDir;

fn sample_batch() -> BatchResult {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    BatchProcessor::new(Validator::new(today)).process(vec![
        Record::from_cells(["P1", "9876543217", "AB", "1980-01-01", "2025-05-01"]),
        Record::from_cells(["P2", "", "AB", "1980-01-01", "2025-05-01"]),
        Record::from_cells(["P3", "1234567897", "CD", "1975-03-03", "2025-07-01"]),
    ])
}

fn sample_summary(batch: &BatchResult) -> ReportSummary {
    let generated = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    ReportSummary::from_batch(batch, generated)
}

#[test]
fn summary_counts_and_percent() {
    let batch = sample_batch();
    let summary = sample_summary(&batch);

    assert_eq!(summary.summary.total_records_processed, 3);
    assert_eq!(summary.summary.valid_records, 1);
    assert_eq!(summary.summary.invalid_records, 2);
    let percent = summary.summary.percent_records_valid.unwrap();
    assert!((percent - 33.33).abs() < 0.01);
    assert_eq!(summary.percent_label(), "33.33%");
}

#[test]
fn json_report_uses_machine_keys() {
    let batch = sample_batch();
    let summary = sample_summary(&batch);
    let mut out = Vec::new();
    write_json_report(&summary, batch.invalid_records(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["summary"]["timestamp"], "2025-06-15T12:00:00Z");
    assert_eq!(json["summary"]["totalRecordsProcessed"], 3);
    assert_eq!(json["summary"]["validRecords"], 1);
    assert_eq!(json["summary"]["invalidRecords"], 2);
    assert_eq!(json["validationIssues"]["missing"], 1);
    assert_eq!(json["validationIssues"]["range"], 1);
    assert_eq!(json["fieldsWithIssues"]["healthcardnumber"], 1);
    assert_eq!(json["fieldsWithIssues"]["servicedate"], 1);
    assert_eq!(json["invalidRecords"][0]["record"]["patientId"], "P2");
    assert_eq!(json["invalidRecords"][1]["errors"][0]["rule"], "range");
}

#[test]
fn json_report_marks_empty_run_percent_as_null() {
    let batch = BatchResult::new();
    let summary = sample_summary(&batch);
    let mut out = Vec::new();
    write_json_report(&summary, batch.invalid_records(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["summary"]["totalRecordsProcessed"], 0);
    assert!(json["summary"]["percentRecordsValid"].is_null());
    assert_eq!(json["invalidRecords"].as_array().unwrap().len(), 0);
}

#[test]
fn text_report_layout() {
    let batch = sample_batch();
    let summary = sample_summary(&batch);
    let mut out = Vec::new();
    write_text_report(&summary, batch.invalid_records(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    insta::assert_snapshot!("error_report_text", text);
}

#[test]
fn files_are_written_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("nested").join("output");
    let batch = sample_batch();
    let summary = sample_summary(&batch);

    write_valid_csv_file(batch.valid_records(), &out_dir.join(VALID_CSV_FILE)).unwrap();
    write_text_report_file(&summary, batch.invalid_records(), &out_dir.join(TEXT_REPORT_FILE))
        .unwrap();
    write_json_report_file(&summary, batch.invalid_records(), &out_dir.join(JSON_REPORT_FILE))
        .unwrap();

    let csv = fs::read_to_string(out_dir.join(VALID_CSV_FILE)).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("P1,"));

    let text = fs::read_to_string(out_dir.join(TEXT_REPORT_FILE)).unwrap();
    assert!(text.contains("Patient ID: P3"));

    assert!(out_dir.join(JSON_REPORT_FILE).exists());
    let leftovers: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
