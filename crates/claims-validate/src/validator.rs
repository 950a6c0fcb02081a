//! Record validator.

use chrono::{Local, NaiveDate};
use claims_model::{Record, ValidationError, ValidationOutcome};

use crate::checks;

/// Runs every field check for a record against a fixed reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    today: NaiveDate,
}

impl Validator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Validator using the local calendar date.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// All errors for a record.
    ///
    /// Order is fixed: health card number, version code, date of birth,
    /// service date.
    pub fn errors(&self, record: &Record) -> Vec<ValidationError> {
        let mut errors = checks::health_card_number(record.health_card_number());
        errors.extend(checks::version_code(record.version_code()));
        errors.extend(checks::date_of_birth(record.date_of_birth(), self.today));
        errors.extend(checks::service_date(
            record.service_date(),
            record.date_of_birth(),
            self.today,
        ));
        errors
    }

    pub fn validate(&self, record: Record) -> ValidationOutcome {
        let errors = self.errors(&record);
        ValidationOutcome::new(record, errors)
    }
}
