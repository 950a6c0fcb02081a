//! Per-field validation checks.
//!
//! Every check is a pure function of raw field values (and the reference
//! date where needed). Errors come back in the order the checks run.

pub mod dates;
pub mod health_card;
pub mod version_code;

pub use dates::{age_in_years, date_of_birth, parse_date, service_date};
pub use health_card::{health_card_number, passes_mod10};
pub use version_code::version_code;

/// Treat empty values the same as absent ones.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
