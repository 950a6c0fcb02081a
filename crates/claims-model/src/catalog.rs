//! Rule kinds and field identifiers.
//!
//! Machine names (`as_str`) are used as aggregation and report keys and
//! must not change between releases. Display names are for people.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// A required value is absent.
    Missing,
    /// A value is present but fails a format or logical check.
    Invalid,
    /// A value is outside its allowed bounds.
    Range,
    /// A value has the wrong type. Raised by ingestion, never by the validator.
    Type,
    /// The row or table shape is wrong. Raised by ingestion, never by the validator.
    Structure,
}

impl RuleKind {
    /// All rule kinds in catalog order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Missing,
            Self::Invalid,
            Self::Range,
            Self::Type,
            Self::Structure,
        ]
    }

    /// Stable machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
            Self::Range => "range",
            Self::Type => "type",
            Self::Structure => "structure",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Missing => "Missing",
            Self::Invalid => "Invalid",
            Self::Range => "Out of range",
            Self::Type => "Wrong type",
            Self::Structure => "Structure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Missing => "A required field is empty or not present",
            Self::Invalid => "A value is present but is not logically valid",
            Self::Range => "A value is outside the allowed range",
            Self::Type => "A value exists but is of the wrong type",
            Self::Structure => "The record or table structure is malformed",
        }
    }

    /// Parse a machine or display name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "missing" => Some(Self::Missing),
            "invalid" => Some(Self::Invalid),
            "range" | "outofrange" => Some(Self::Range),
            "type" | "wrongtype" => Some(Self::Type),
            "structure" => Some(Self::Structure),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record attribute a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    PatientId,
    HealthCardNumber,
    VersionCode,
    DateOfBirth,
    ServiceDate,
}

impl FieldId {
    /// All fields in record column order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::PatientId,
            Self::HealthCardNumber,
            Self::VersionCode,
            Self::DateOfBirth,
            Self::ServiceDate,
        ]
    }

    /// Stable machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatientId => "patientid",
            Self::HealthCardNumber => "healthcardnumber",
            Self::VersionCode => "versioncode",
            Self::DateOfBirth => "dateofbirth",
            Self::ServiceDate => "servicedate",
        }
    }

    /// Column heading used in exports and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PatientId => "Patient ID",
            Self::HealthCardNumber => "Health Card Number",
            Self::VersionCode => "Version Code",
            Self::DateOfBirth => "Date of Birth",
            Self::ServiceDate => "Service Date",
        }
    }

    /// Parse a machine name, camelCase name or display name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "patientid" => Some(Self::PatientId),
            "healthcardnumber" => Some(Self::HealthCardNumber),
            "versioncode" => Some(Self::VersionCode),
            "dateofbirth" => Some(Self::DateOfBirth),
            "servicedate" => Some(Self::ServiceDate),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name for a field or rule key.
///
/// Unknown keys are returned unchanged.
pub fn display_name_for_key(key: &str) -> &str {
    if let Some(field) = FieldId::parse(key) {
        return field.display_name();
    }
    if let Some(rule) = RuleKind::parse(key) {
        return rule.display_name();
    }
    key
}

fn normalize_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
