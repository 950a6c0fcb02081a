//! Health card number checks.

use claims_model::{Check, HEALTH_CARD_LENGTH, ValidationError};

use super::present;

/// Validate a health card number.
///
/// Length and digit-only checks run independently so both problems are
/// reported together. A non-digit value stops before the checksum, which
/// needs pure digits; a wrong-length digit string still gets the checksum.
pub fn health_card_number(value: Option<&str>) -> Vec<ValidationError> {
    let Some(value) = present(value) else {
        return vec![Check::HealthCardMissing.into()];
    };

    let mut errors = Vec::new();

    if value.chars().count() != HEALTH_CARD_LENGTH {
        errors.push(Check::HealthCardLength.into());
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        errors.push(Check::HealthCardNonDigit.into());
        return errors;
    }

    if !passes_mod10(value) {
        errors.push(Check::HealthCardChecksum.into());
    }

    errors
}

/// MOD-10 (Luhn) check over a digit string.
///
/// The last digit is the check digit. Payload digits are walked left to
/// right and those whose index has the parity of `len - 2` are doubled
/// (minus 9 when the result exceeds 9). Valid when the total is divisible
/// by 10. Returns false for empty input or any non-digit.
pub fn passes_mod10(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() || digits.len() != number.len() {
        return false;
    }

    // (len - 2) and len always share parity.
    let parity = digits.len() % 2;
    let Some((check_digit, payload)) = digits.split_last() else {
        return false;
    };

    let mut checksum = *check_digit;
    for (idx, digit) in payload.iter().enumerate() {
        let mut value = *digit;
        if idx % 2 == parity {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        checksum += value;
    }

    checksum % 10 == 0
}
