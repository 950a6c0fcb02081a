//! Health card version code checks.

use claims_model::{Check, VERSION_CODE_LENGTH, ValidationError};

use super::present;

/// Validate a version code: exactly two uppercase letters.
///
/// After the presence check, length and letter case are both evaluated.
pub fn version_code(value: Option<&str>) -> Vec<ValidationError> {
    let Some(value) = present(value) else {
        return vec![Check::VersionCodeMissing.into()];
    };

    let mut errors = Vec::new();

    if value.chars().count() != VERSION_CODE_LENGTH {
        errors.push(Check::VersionCodeLength.into());
    }

    if !value.chars().all(|c| c.is_alphabetic() && c.is_uppercase()) {
        errors.push(Check::VersionCodeCase.into());
    }

    errors
}
