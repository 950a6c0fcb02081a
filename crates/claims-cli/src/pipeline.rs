//! Run stages: ingest, validate, report, store.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use claims_ingest::{CsvTableSource, RecordSource};
use claims_model::Record;
use claims_report::{
    JSON_REPORT_FILE, ReportSummary, TEXT_REPORT_FILE, VALID_CSV_FILE, write_json_report_file,
    write_text_report_file, write_valid_csv_file,
};
use claims_store::{DEFAULT_DB_FILE, RecordStore};
use claims_validate::{BatchProcessor, BatchResult, Validator};
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Which report files a run writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    #[default]
    Both,
}

impl ReportFormat {
    pub fn writes_text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Settings for one validation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Reference date for age and service-window checks.
    pub today: NaiveDate,
    pub report: ReportFormat,
    /// Persist valid records to SQLite.
    pub store: bool,
    /// Worker threads; 1 validates on the calling thread.
    pub jobs: usize,
    /// Validate and summarise without writing anything.
    pub dry_run: bool,
}

impl RunOptions {
    /// Options with defaults: output next to the input, both reports, store on.
    pub fn new(input: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let input = input.into();
        let output_dir = default_output_dir(&input);
        Self {
            input,
            output_dir,
            today,
            report: ReportFormat::default(),
            store: true,
            jobs: 1,
            dry_run: false,
        }
    }
}

/// `<input dir>/output`.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

/// Files written by a run. `None` means the output was skipped.
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    pub valid_csv: Option<PathBuf>,
    pub text_report: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
    pub database: Option<PathBuf>,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub batch: BatchResult,
    pub summary: ReportSummary,
    pub outputs: OutputPaths,
    /// Rows upserted into the store, when storing.
    pub stored: Option<usize>,
    pub dry_run: bool,
}

impl RunResult {
    pub fn has_invalid(&self) -> bool {
        self.summary.has_invalid()
    }
}

/// Run every stage against `options.input`.
pub fn run(options: &RunOptions, generated_at: DateTime<Utc>) -> Result<RunResult> {
    let run_span = info_span!("run", input = %options.input.display());
    let _run_guard = run_span.enter();

    let records = ingest(&options.input)?;
    let batch = validate(records, options.today, options.jobs);
    let summary = ReportSummary::from_batch(&batch, generated_at);

    let mut outputs = OutputPaths::default();
    let mut stored = None;
    if options.dry_run {
        info!("dry run, skipping outputs");
    } else {
        outputs = write_outputs(&batch, &summary, &options.output_dir, options.report)?;
        if options.store {
            let path = options.output_dir.join(DEFAULT_DB_FILE);
            stored = Some(store_valid(batch.valid_records(), &path)?);
            outputs.database = Some(path);
        }
    }

    Ok(RunResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        batch,
        summary,
        outputs,
        stored,
        dry_run: options.dry_run,
    })
}

pub fn ingest(input: &Path) -> Result<Vec<Record>> {
    let start = Instant::now();
    let mut source = CsvTableSource::new(input);
    let records = source
        .extract_records()
        .with_context(|| format!("ingest {}", source.path().display()))?;
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

pub fn validate(records: Vec<Record>, today: NaiveDate, jobs: usize) -> BatchResult {
    let start = Instant::now();
    let processor = BatchProcessor::new(Validator::new(today));
    let batch = if jobs > 1 {
        processor.process_parallel(records, jobs)
    } else {
        processor.process(records)
    };

    for invalid in batch.invalid_records() {
        let patient_id = invalid.record.patient_id().unwrap_or_default();
        debug!(
            patient_id = redact_value(patient_id),
            error_count = invalid.errors.len(),
            "record rejected"
        );
    }
    info!(
        today = %processor.validator().today(),
        valid = batch.valid_count(),
        invalid = batch.invalid_count(),
        errors = batch.error_count(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    batch
}

/// Write the valid-record CSV and the requested reports.
pub fn write_outputs(
    batch: &BatchResult,
    summary: &ReportSummary,
    output_dir: &Path,
    report: ReportFormat,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut outputs = OutputPaths::default();

    let csv_path = output_dir.join(VALID_CSV_FILE);
    write_valid_csv_file(batch.valid_records(), &csv_path).context("write valid records")?;
    outputs.valid_csv = Some(csv_path);

    if report.writes_text() {
        let path = output_dir.join(TEXT_REPORT_FILE);
        write_text_report_file(summary, batch.invalid_records(), &path)
            .context("write text report")?;
        outputs.text_report = Some(path);
    }
    if report.writes_json() {
        let path = output_dir.join(JSON_REPORT_FILE);
        write_json_report_file(summary, batch.invalid_records(), &path)
            .context("write json report")?;
        outputs.json_report = Some(path);
    }
    Ok(outputs)
}

pub fn store_valid(records: &[Record], path: &Path) -> Result<usize> {
    let mut store = RecordStore::open(path).context("open record store")?;
    let written = store
        .insert_records(records)
        .context("store valid records")?;
    Ok(written)
}
