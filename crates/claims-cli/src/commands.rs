use anyhow::Result;
use chrono::Utc;
use comfy_table::Table;
use tracing::info;

use claims_cli::pipeline::{self, RunOptions, RunResult};
use claims_model::{Check, FieldId, RuleKind};
use claims_validate::Validator;

use crate::cli::RunArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_rules() -> Result<()> {
    let mut rules = Table::new();
    rules.set_header(vec![
        header_cell("Rule"),
        header_cell("Name"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut rules);
    for rule in RuleKind::all() {
        rules.add_row(vec![rule.as_str(), rule.display_name(), rule.description()]);
    }
    println!("{rules}");

    let mut fields = Table::new();
    fields.set_header(vec![header_cell("Field"), header_cell("Name")]);
    apply_table_style(&mut fields);
    for field in FieldId::all() {
        fields.add_row(vec![field.as_str(), field.display_name()]);
    }
    println!();
    println!("{fields}");

    let mut checks = Table::new();
    checks.set_header(vec![
        header_cell("Code"),
        header_cell("Field"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut checks);
    for check in Check::all() {
        checks.add_row(vec![
            check.code().to_string(),
            check.field().display_name().to_string(),
            check.rule().as_str().to_string(),
            check.message(),
        ]);
    }
    println!();
    println!("{checks}");
    Ok(())
}

pub fn run_validation(args: &RunArgs) -> Result<RunResult> {
    let today = args
        .today
        .unwrap_or_else(|| Validator::for_today().today());
    let mut options = RunOptions::new(&args.input, today);
    if let Some(dir) = &args.output_dir {
        options.output_dir = dir.clone();
    }
    options.report = args.report.into();
    options.store = !args.no_store;
    options.jobs = args.jobs.max(1);
    options.dry_run = args.dry_run;

    let result = pipeline::run(&options, Utc::now())?;
    info!(
        total = result.summary.total(),
        invalid = result.summary.summary.invalid_records,
        "run complete"
    );
    Ok(result)
}
