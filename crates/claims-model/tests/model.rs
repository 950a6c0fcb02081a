use std::collections::BTreeSet;

use claims_model::{Check, FieldId, Record, RuleKind};

#[test]
fn check_codes_are_unique() {
    let codes: BTreeSet<&str> = Check::all().iter().map(Check::code).collect();
    assert_eq!(codes.len(), Check::all().len());
}

#[test]
fn check_messages_are_non_empty() {
    for check in Check::all() {
        assert!(!check.message().trim().is_empty(), "{check:?}");
    }
}

#[test]
fn validator_checks_never_use_ingestion_rule_kinds() {
    for check in Check::all() {
        assert!(!matches!(check.rule(), RuleKind::Type | RuleKind::Structure));
        assert_ne!(check.field(), FieldId::PatientId);
    }
}

#[test]
fn missing_checks_are_classified_as_missing() {
    for check in [
        Check::HealthCardMissing,
        Check::VersionCodeMissing,
        Check::DateOfBirthMissing,
        Check::ServiceDateMissing,
    ] {
        assert_eq!(check.rule(), RuleKind::Missing);
    }
}

#[test]
fn record_values_follow_column_order() {
    let record = Record::from_cells(["P7", "1234567897", "", "1990-05-05", "2024-02-02"]);
    assert_eq!(
        record.values(),
        [
            Some("P7"),
            Some("1234567897"),
            None,
            Some("1990-05-05"),
            Some("2024-02-02"),
        ]
    );
    for (field, value) in FieldId::all().iter().zip(record.values()) {
        assert_eq!(record.get(*field), value);
    }
}
