use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use claims_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let counts = &result.summary.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Errors"),
        header_cell("Valid %"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(counts.total_records_processed).add_attribute(Attribute::Bold),
        count_cell(counts.valid_records, Color::Green),
        count_cell(counts.invalid_records, Color::Red),
        count_cell(result.batch.error_count(), Color::Red),
        Cell::new(result.summary.percent_label()),
    ]);
    println!("{table}");

    print_issue_table(result);
    print_outputs(result);
}

fn print_issue_table(result: &RunResult) {
    let summary = &result.summary;
    if summary.validation_issues.is_empty() && summary.fields_with_issues.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Count"),
        header_cell("Field"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let rules: Vec<_> = summary.validation_issues.iter().collect();
    let fields: Vec<_> = summary.fields_with_issues.iter().collect();
    for row in 0..rules.len().max(fields.len()) {
        let (rule, rule_count) = match rules.get(row) {
            Some((rule, count)) => (
                Cell::new(rule.display_name()),
                count_cell(**count, Color::Red),
            ),
            None => (dim_cell(""), dim_cell("")),
        };
        let (field, field_count) = match fields.get(row) {
            Some((field, count)) => (
                Cell::new(field.display_name()),
                count_cell(**count, Color::Yellow),
            ),
            None => (dim_cell(""), dim_cell("")),
        };
        table.add_row(vec![rule, rule_count, field, field_count]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_outputs(result: &RunResult) {
    let outputs = &result.outputs;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Output"), header_cell("Path")]);
    apply_table_style(&mut table);
    for (label, path) in [
        ("Valid records", &outputs.valid_csv),
        ("Text report", &outputs.text_report),
        ("JSON report", &outputs.json_report),
    ] {
        table.add_row(vec![Cell::new(label), path_cell(path.as_ref())]);
    }
    let database = match (&outputs.database, result.stored) {
        (Some(path), Some(rows)) => Cell::new(format!("{} ({rows} rows)", path.display())),
        _ => dim_cell("-"),
    };
    table.add_row(vec![Cell::new("Record store"), database]);
    println!();
    println!("{table}");
}

fn path_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
