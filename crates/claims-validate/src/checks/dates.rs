//! Date of birth and service date checks.
//!
//! Dates are calendar dates in `YYYY-MM-DD` form. All bounds are evaluated
//! against a caller-supplied reference date so results are reproducible.

use chrono::{Datelike, Days, NaiveDate};
use claims_model::{Check, MAX_AGE_YEARS, SERVICE_WINDOW_DAYS, ValidationError};

use super::present;

/// Accepted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// The year must be exactly four digits; month and day may drop their
/// leading zero. Signs and surrounding whitespace are rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn has_date_shape(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
}

/// Age in whole years on `today`.
///
/// Negative when `birth` is after `today`.
pub fn age_in_years(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validate a date of birth.
pub fn date_of_birth(value: Option<&str>, today: NaiveDate) -> Vec<ValidationError> {
    let Some(value) = present(value) else {
        return vec![Check::DateOfBirthMissing.into()];
    };
    let Some(birth) = parse_date(value) else {
        return vec![Check::DateOfBirthFormat.into()];
    };

    let age = age_in_years(today, birth);
    if age < 0 {
        return vec![Check::DateOfBirthInFuture.into()];
    }
    if age >= MAX_AGE_YEARS {
        return vec![Check::DateOfBirthTooOld.into()];
    }

    Vec::new()
}

/// Validate a service date, cross-checked against the raw date of birth.
///
/// An unparseable date of birth skips the cross-field check; the date of
/// birth check already reports it.
pub fn service_date(
    value: Option<&str>,
    date_of_birth: Option<&str>,
    today: NaiveDate,
) -> Vec<ValidationError> {
    let Some(value) = present(value) else {
        return vec![Check::ServiceDateMissing.into()];
    };
    let Some(service) = parse_date(value) else {
        return vec![Check::ServiceDateFormat.into()];
    };

    if service > today {
        return vec![Check::ServiceDateInFuture.into()];
    }

    let window_start = today.checked_sub_days(Days::new(SERVICE_WINDOW_DAYS.unsigned_abs()));
    if window_start.is_some_and(|start| service < start) {
        return vec![Check::ServiceDateTooOld.into()];
    }

    if let Some(birth) = date_of_birth.and_then(parse_date)
        && service < birth
    {
        return vec![Check::ServiceDateBeforeBirth.into()];
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn dob_checks(value: Option<&str>) -> Vec<Check> {
        date_of_birth(value, today())
            .into_iter()
            .map(|e| e.check)
            .collect()
    }

    fn svc_checks(value: Option<&str>, dob: Option<&str>) -> Vec<Check> {
        service_date(value, dob, today())
            .into_iter()
            .map(|e| e.check)
            .collect()
    }

    #[test]
    fn parse_date_requires_four_digit_unsigned_year() {
        assert_eq!(parse_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_date("2024-1-5"), Some(date(2024, 1, 5)));
        assert_eq!(parse_date(" 2024-01-01"), None);
        assert_eq!(parse_date("2024-01-01 "), None);
        assert_eq!(parse_date("+2024-01-01"), None);
        assert_eq!(parse_date("999-01-01"), None);
        assert_eq!(parse_date("12024-01-01"), None);
        assert_eq!(parse_date("2024-001-01"), None);
    }

    #[test]
    fn malformed_dates_are_format_errors() {
        for value in [" 2024-01-01", "+2024-01-01", "999-01-01"] {
            assert_eq!(dob_checks(Some(value)), vec![Check::DateOfBirthFormat], "{value:?}");
            assert_eq!(
                svc_checks(Some(value), None),
                vec![Check::ServiceDateFormat],
                "{value:?}"
            );
        }
    }

    #[test]
    fn age_counts_birthday_not_yet_reached() {
        assert_eq!(age_in_years(today(), date(1990, 6, 15)), 35);
        assert_eq!(age_in_years(today(), date(1990, 6, 16)), 34);
        assert_eq!(age_in_years(today(), date(2025, 6, 16)), -1);
        assert_eq!(age_in_years(date(2025, 12, 31), date(2026, 1, 1)), -1);
    }

    #[test]
    fn leap_day_birthday_counts_on_march_first() {
        assert_eq!(age_in_years(date(2025, 2, 28), date(2000, 2, 29)), 24);
        assert_eq!(age_in_years(date(2025, 3, 1), date(2000, 2, 29)), 25);
    }

    #[test]
    fn date_of_birth_rules() {
        assert!(dob_checks(Some("1980-01-01")).is_empty());
        assert!(dob_checks(Some("2025-06-15")).is_empty());
        assert_eq!(dob_checks(None), vec![Check::DateOfBirthMissing]);
        assert_eq!(dob_checks(Some("2024-13-01")), vec![Check::DateOfBirthFormat]);
        assert_eq!(dob_checks(Some("01/02/1980")), vec![Check::DateOfBirthFormat]);
        assert_eq!(dob_checks(Some("2025-06-16")), vec![Check::DateOfBirthInFuture]);
        assert_eq!(dob_checks(Some("1874-06-15")), vec![Check::DateOfBirthTooOld]);
        assert_eq!(dob_checks(Some("1875-06-15")), vec![Check::DateOfBirthTooOld]);
        assert!(dob_checks(Some("1875-06-16")).is_empty());
    }

    #[test]
    fn service_date_window_is_inclusive() {
        assert!(svc_checks(Some("2024-12-14"), None).is_empty());
        assert_eq!(
            svc_checks(Some("2024-12-13"), None),
            vec![Check::ServiceDateTooOld]
        );
        assert!(svc_checks(Some("2025-06-15"), None).is_empty());
        assert_eq!(
            svc_checks(Some("2025-06-16"), None),
            vec![Check::ServiceDateInFuture]
        );
    }

    #[test]
    fn service_date_missing_and_format() {
        assert_eq!(svc_checks(None, None), vec![Check::ServiceDateMissing]);
        assert_eq!(
            svc_checks(Some("2025-02-30"), None),
            vec![Check::ServiceDateFormat]
        );
    }

    #[test]
    fn service_before_birth_is_range_error() {
        assert_eq!(
            svc_checks(Some("2025-03-01"), Some("2025-04-01")),
            vec![Check::ServiceDateBeforeBirth]
        );
        assert!(svc_checks(Some("2025-04-01"), Some("2025-04-01")).is_empty());
    }

    #[test]
    fn unparseable_birth_date_skips_cross_check() {
        assert!(svc_checks(Some("2025-03-01"), Some("not a date")).is_empty());
        assert!(svc_checks(Some("2025-03-01"), None).is_empty());
    }
}
