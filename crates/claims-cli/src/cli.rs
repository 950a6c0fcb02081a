//! CLI argument definitions for the claims validator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use claims_cli::pipeline::ReportFormat;
use claims_validate::DATE_FORMAT;
use claims_validate::checks::parse_date as parse_iso_date;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "claims",
    version,
    about = "Validate patient billing records and report data quality",
    long_about = "Validate patient billing records extracted from a CSV table.\n\n\
                  Checks health card numbers (MOD-10), version codes, birth and\n\
                  service dates, then writes the valid records, an error report,\n\
                  and a SQLite copy of the valid records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers and field values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV extract and write outputs.
    Run(RunArgs),

    /// List rule kinds, fields and checks.
    Rules,
}

#[derive(Parser)]
pub struct RunArgs {
    /// CSV file with a header row and five columns per record.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reference date for age and service-window checks (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Report files to write.
    #[arg(long = "report", value_enum, default_value = "both")]
    pub report: ReportArg,

    /// Skip writing valid records to the SQLite store.
    #[arg(long = "no-store")]
    pub no_store: bool,

    /// Worker threads for validation.
    #[arg(long = "jobs", value_name = "N", default_value_t = 1)]
    pub jobs: usize,

    /// Validate and print the summary without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any record is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportArg {
    Text,
    Json,
    Both,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Text => ReportFormat::Text,
            ReportArg::Json => ReportFormat::Json,
            ReportArg::Both => ReportFormat::Both,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).ok_or_else(|| format!("expected a calendar date in {DATE_FORMAT} form"))
}
