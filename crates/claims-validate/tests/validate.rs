//! End-to-end validation tests.

use chrono::{Days, Months, NaiveDate};
use claims_model::{Check, FieldId, Record, RuleKind};
use claims_validate::checks::{date_of_birth, service_date, version_code};
use claims_validate::{BatchProcessor, Validator};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn record(cells: [&str; 5]) -> Record {
    Record::from_cells(cells)
}

#[test]
fn version_code_properties() {
    assert!(version_code(Some("AB")).is_empty());

    let lower = version_code(Some("ab"));
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].check, Check::VersionCodeCase);

    let long = version_code(Some("ABC"));
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].check, Check::VersionCodeLength);

    let empty = version_code(Some(""));
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].rule, RuleKind::Missing);
}

#[test]
fn date_of_birth_properties() {
    let bad_month = date_of_birth(Some("2024-13-01"), today());
    assert_eq!(bad_month.len(), 1);
    assert_eq!(bad_month[0].rule, RuleKind::Invalid);

    let tomorrow = iso(today() + Days::new(1));
    let future = date_of_birth(Some(&tomorrow), today());
    assert_eq!(future.len(), 1);
    assert_eq!(future[0].rule, RuleKind::Range);
    assert_eq!(future[0].check, Check::DateOfBirthInFuture);

    let ancient = iso(today() - Months::new(151 * 12));
    let too_old = date_of_birth(Some(&ancient), today());
    assert_eq!(too_old.len(), 1);
    assert_eq!(too_old[0].rule, RuleKind::Range);
    assert_eq!(too_old[0].check, Check::DateOfBirthTooOld);
}

#[test]
fn service_date_properties() {
    let edge = iso(today() - Days::new(183));
    assert!(service_date(Some(&edge), Some("1980-01-01"), today()).is_empty());

    let stale = iso(today() - Days::new(184));
    let errors = service_date(Some(&stale), Some("1980-01-01"), today());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, RuleKind::Range);

    let errors = service_date(Some("2025-05-01"), Some("2025-05-02"), today());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].check, Check::ServiceDateBeforeBirth);

    assert!(service_date(Some("2025-05-01"), Some("05/02/2025"), today()).is_empty());
}

#[test]
fn unparseable_birth_date_is_reported_once() {
    let outcome = Validator::new(today()).validate(record([
        "P1",
        "9876543217",
        "AB",
        "1980/01/01",
        "2025-05-01",
    ]));
    let checks: Vec<Check> = outcome.errors().iter().map(|e| e.check).collect();
    assert_eq!(checks, vec![Check::DateOfBirthFormat]);
}

#[test]
fn validation_is_idempotent() {
    let validator = Validator::new(today());
    let input = record(["P9", "12AB", "ab", "2024-13-01", "2030-01-01"]);
    let first = validator.validate(input.clone());
    let second = validator.validate(input);
    assert_eq!(first, second);
}

#[test]
fn batch_partitions_and_counts() {
    let r1 = record(["P1", "9876543217", "AB", "1980-01-01", "2025-05-01"]);
    let r2 = record(["P2", "", "AB", "1980-01-01", "2025-05-01"]);
    let r3 = record(["P3", "1234567897", "CD", "1975-03-03", "2025-07-01"]);

    let result = BatchProcessor::new(Validator::new(today())).process(vec![
        r1.clone(),
        r2.clone(),
        r3.clone(),
    ]);

    assert_eq!(result.valid_records(), &[r1]);
    assert_eq!(result.invalid_records().len(), 2);

    let (first, second) = (&result.invalid_records()[0], &result.invalid_records()[1]);
    assert_eq!(first.record, r2);
    assert_eq!(first.errors.len(), 1);
    assert_eq!(first.errors[0].rule, RuleKind::Missing);
    assert_eq!(second.record, r3);
    assert_eq!(second.errors.len(), 1);
    assert_eq!(second.errors[0].rule, RuleKind::Range);

    let rules: Vec<(RuleKind, usize)> = result
        .rule_frequency()
        .iter()
        .map(|(k, v)| (*k, *v))
        .collect();
    assert_eq!(rules, vec![(RuleKind::Missing, 1), (RuleKind::Range, 1)]);

    let fields: Vec<(FieldId, usize)> = result
        .field_frequency()
        .iter()
        .map(|(k, v)| (*k, *v))
        .collect();
    assert_eq!(
        fields,
        vec![(FieldId::HealthCardNumber, 1), (FieldId::ServiceDate, 1)]
    );
}

#[test]
fn parallel_processing_matches_sequential() {
    let mut records = Vec::new();
    for idx in 0..97 {
        let id = format!("P{idx}");
        let cells = match idx % 4 {
            0 => [id.as_str(), "9876543217", "AB", "1980-01-01", "2025-05-01"],
            1 => [id.as_str(), "9876543210", "ab", "1980-01-01", "2025-05-01"],
            2 => [id.as_str(), "", "", "", ""],
            _ => [id.as_str(), "1234567897", "XY", "2026-01-01", "2025-06-01"],
        };
        records.push(record(cells));
    }

    let processor = BatchProcessor::new(Validator::new(today()));
    let sequential = processor.process(records.clone());
    for workers in [2, 3, 8, 200] {
        assert_eq!(processor.process_parallel(records.clone(), workers), sequential);
    }
}

#[test]
fn batch_result_serializes_machine_keys() {
    let result = BatchProcessor::new(Validator::new(today()))
        .process(vec![record(["P2", "", "AB", "1980-01-01", "2025-05-01"])]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["ruleFrequency"]["missing"], 1);
    assert_eq!(json["fieldFrequency"]["healthcardnumber"], 1);
}

#[test]
fn loosely_formatted_dates_keep_records_out_of_the_valid_set() {
    let batch = BatchProcessor::new(Validator::new(today())).process(vec![
        record(["P1", "9876543217", "AB", "+1980-01-01", "2025-05-01"]),
        record(["P2", "9876543217", "AB", "1980-01-01", " 2025-05-01"]),
        record(["P3", "9876543217", "AB", "980-01-01", "2025-05-01"]),
    ]);

    assert_eq!(batch.valid_count(), 0);
    assert_eq!(batch.rule_frequency().get(&RuleKind::Invalid), Some(&3));
    assert_eq!(batch.field_frequency().get(&FieldId::DateOfBirth), Some(&2));
    assert_eq!(batch.field_frequency().get(&FieldId::ServiceDate), Some(&1));
}
