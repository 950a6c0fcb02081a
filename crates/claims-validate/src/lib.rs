//! Validation engine for patient billing records.
//!
//! Field checks live in [`checks`]; [`Validator`] runs them for one record
//! and [`BatchProcessor`] folds a whole sequence into a [`BatchResult`].
//! Malformed values never produce a Rust error, only [`ValidationError`]s.
//!
//! [`ValidationError`]: claims_model::ValidationError

pub mod batch;
pub mod checks;
pub mod validator;

pub use batch::{BatchProcessor, BatchResult, InvalidRecord};
pub use checks::dates::DATE_FORMAT;
pub use validator::Validator;
