//! Individual validation checks.
//!
//! Each check maps to exactly one field and one rule kind, so errors built
//! from a check can always be aggregated by either key.

use serde::{Deserialize, Serialize};

use crate::catalog::{FieldId, RuleKind};

/// Required health card number length.
pub const HEALTH_CARD_LENGTH: usize = 10;

/// Required version code length.
pub const VERSION_CODE_LENGTH: usize = 2;

/// Exclusive upper bound on patient age in whole years.
pub const MAX_AGE_YEARS: i32 = 150;

/// How far back a service date may lie, inclusive, in days.
pub const SERVICE_WINDOW_DAYS: i64 = 183;

/// A specific check that a record value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    // Health card number
    HealthCardMissing,
    HealthCardLength,
    HealthCardNonDigit,
    HealthCardChecksum,

    // Version code
    VersionCodeMissing,
    VersionCodeLength,
    VersionCodeCase,

    // Date of birth
    DateOfBirthMissing,
    DateOfBirthFormat,
    DateOfBirthInFuture,
    DateOfBirthTooOld,

    // Service date
    ServiceDateMissing,
    ServiceDateFormat,
    ServiceDateInFuture,
    ServiceDateTooOld,
    ServiceDateBeforeBirth,
}

impl Check {
    /// Every check, grouped by field in column order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::HealthCardMissing,
            Self::HealthCardLength,
            Self::HealthCardNonDigit,
            Self::HealthCardChecksum,
            Self::VersionCodeMissing,
            Self::VersionCodeLength,
            Self::VersionCodeCase,
            Self::DateOfBirthMissing,
            Self::DateOfBirthFormat,
            Self::DateOfBirthInFuture,
            Self::DateOfBirthTooOld,
            Self::ServiceDateMissing,
            Self::ServiceDateFormat,
            Self::ServiceDateInFuture,
            Self::ServiceDateTooOld,
            Self::ServiceDateBeforeBirth,
        ]
    }

    /// Short stable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Check::HealthCardMissing => "HCN001",
            Check::HealthCardLength => "HCN002",
            Check::HealthCardNonDigit => "HCN003",
            Check::HealthCardChecksum => "HCN004",
            Check::VersionCodeMissing => "VER001",
            Check::VersionCodeLength => "VER002",
            Check::VersionCodeCase => "VER003",
            Check::DateOfBirthMissing => "DOB001",
            Check::DateOfBirthFormat => "DOB002",
            Check::DateOfBirthInFuture => "DOB003",
            Check::DateOfBirthTooOld => "DOB004",
            Check::ServiceDateMissing => "SVC001",
            Check::ServiceDateFormat => "SVC002",
            Check::ServiceDateInFuture => "SVC003",
            Check::ServiceDateTooOld => "SVC004",
            Check::ServiceDateBeforeBirth => "SVC005",
        }
    }

    pub fn field(&self) -> FieldId {
        match self {
            Check::HealthCardMissing
            | Check::HealthCardLength
            | Check::HealthCardNonDigit
            | Check::HealthCardChecksum => FieldId::HealthCardNumber,
            Check::VersionCodeMissing | Check::VersionCodeLength | Check::VersionCodeCase => {
                FieldId::VersionCode
            }
            Check::DateOfBirthMissing
            | Check::DateOfBirthFormat
            | Check::DateOfBirthInFuture
            | Check::DateOfBirthTooOld => FieldId::DateOfBirth,
            Check::ServiceDateMissing
            | Check::ServiceDateFormat
            | Check::ServiceDateInFuture
            | Check::ServiceDateTooOld
            | Check::ServiceDateBeforeBirth => FieldId::ServiceDate,
        }
    }

    pub fn rule(&self) -> RuleKind {
        match self {
            Check::HealthCardMissing
            | Check::VersionCodeMissing
            | Check::DateOfBirthMissing
            | Check::ServiceDateMissing => RuleKind::Missing,
            Check::HealthCardLength
            | Check::HealthCardNonDigit
            | Check::HealthCardChecksum
            | Check::VersionCodeLength
            | Check::VersionCodeCase
            | Check::DateOfBirthFormat
            | Check::ServiceDateFormat => RuleKind::Invalid,
            Check::DateOfBirthInFuture
            | Check::DateOfBirthTooOld
            | Check::ServiceDateInFuture
            | Check::ServiceDateTooOld
            | Check::ServiceDateBeforeBirth => RuleKind::Range,
        }
    }

    /// User-facing message for this check.
    pub fn message(&self) -> String {
        match self {
            Check::HealthCardMissing => "The health card number is missing".to_string(),
            Check::HealthCardLength => format!(
                "The health card number must be exactly {HEALTH_CARD_LENGTH} characters"
            ),
            Check::HealthCardNonDigit => {
                "The health card number contains non-digit characters".to_string()
            }
            Check::HealthCardChecksum => {
                "The health card number failed MOD 10 validation".to_string()
            }
            Check::VersionCodeMissing => "The health card version code is missing".to_string(),
            Check::VersionCodeLength => format!(
                "The health card version code must be exactly {VERSION_CODE_LENGTH} characters"
            ),
            Check::VersionCodeCase => {
                "The health card version code must be uppercase letters".to_string()
            }
            Check::DateOfBirthMissing => "The date of birth is missing".to_string(),
            Check::DateOfBirthFormat => {
                "The date of birth must be in the form YYYY-MM-DD".to_string()
            }
            Check::DateOfBirthInFuture => "The patient must be at least 0 years old".to_string(),
            Check::DateOfBirthTooOld => {
                format!("The patient must be less than {MAX_AGE_YEARS} years old")
            }
            Check::ServiceDateMissing => "The service date is missing".to_string(),
            Check::ServiceDateFormat => {
                "The service date must be in the form YYYY-MM-DD".to_string()
            }
            Check::ServiceDateInFuture => "The service date cannot be in the future".to_string(),
            Check::ServiceDateTooOld => format!(
                "The service date cannot be more than {SERVICE_WINDOW_DAYS} days in the past"
            ),
            Check::ServiceDateBeforeBirth => {
                "The service date cannot be before the date of birth".to_string()
            }
        }
    }
}
