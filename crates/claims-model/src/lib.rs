//! Data model for patient billing record validation.

pub mod catalog;
pub mod check;
pub mod outcome;
pub mod record;

pub use catalog::{FieldId, RuleKind, display_name_for_key};
pub use check::{
    Check, HEALTH_CARD_LENGTH, MAX_AGE_YEARS, SERVICE_WINDOW_DAYS, VERSION_CODE_LENGTH,
};
pub use outcome::{ValidationError, ValidationOutcome};
pub use record::{FIELD_COUNT, Record, cell_value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_validity_follows_errors() {
        let record = Record::from_cells(["P1", "9876543217", "AB", "1980-01-01", "2024-01-01"]);
        let ok = ValidationOutcome::new(record.clone(), vec![]);
        assert!(ok.is_valid());

        let bad = ValidationOutcome::new(record, vec![Check::VersionCodeCase.into()]);
        assert!(!bad.is_valid());
        assert_eq!(bad.errors()[0].field, FieldId::VersionCode);
        assert_eq!(bad.errors()[0].rule, RuleKind::Invalid);
    }

    #[test]
    fn empty_custom_message_uses_standard_text() {
        let error = ValidationError::with_message(Check::ServiceDateTooOld, "  ");
        assert_eq!(error.message, Check::ServiceDateTooOld.message());
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = Record::from_cells(["P1", "", "AB", "1980-01-01", "2024-01-01"]);
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["patientId"], "P1");
        assert!(json["healthCardNumber"].is_null());
        assert_eq!(json["versionCode"], "AB");
    }

    #[test]
    fn error_serializes_machine_names() {
        let error = ValidationError::new(Check::HealthCardMissing);
        let json = serde_json::to_value(&error).expect("serialize error");
        assert_eq!(json["field"], "healthcardnumber");
        assert_eq!(json["rule"], "missing");
        assert_eq!(json["check"], "health_card_missing");
    }
}
