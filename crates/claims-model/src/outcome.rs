use serde::{Deserialize, Serialize};

use crate::catalog::{FieldId, RuleKind};
use crate::check::Check;
use crate::record::Record;

/// A single classified validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: FieldId,
    pub rule: RuleKind,
    pub check: Check,
    pub message: String,
}

impl ValidationError {
    /// Error for a failed check with its standard message.
    pub fn new(check: Check) -> Self {
        Self {
            field: check.field(),
            rule: check.rule(),
            check,
            message: check.message(),
        }
    }

    /// Error for a failed check with a custom message.
    ///
    /// An empty message falls back to the standard one.
    pub fn with_message(check: Check, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::new(check);
        }
        Self {
            field: check.field(),
            rule: check.rule(),
            check,
            message,
        }
    }
}

impl From<Check> for ValidationError {
    fn from(check: Check) -> Self {
        Self::new(check)
    }
}

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    record: Record,
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn new(record: Record, errors: Vec<ValidationError>) -> Self {
        Self {
            record,
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Errors in validator order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_parts(self) -> (Record, Vec<ValidationError>) {
        (self.record, self.errors)
    }
}
