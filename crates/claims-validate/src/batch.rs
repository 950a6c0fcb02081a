//! Batch validation and error aggregation.

use std::collections::BTreeMap;
use std::thread;

use claims_model::{FieldId, Record, RuleKind, ValidationError, ValidationOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::validator::Validator;

/// A record that failed validation, with its errors in validator order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRecord {
    pub record: Record,
    pub errors: Vec<ValidationError>,
}

/// Valid/invalid partition of a batch plus error frequency tables.
///
/// Both record sequences keep input order. Frequencies count every
/// individual error, so one record can contribute several increments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    valid_records: Vec<Record>,
    invalid_records: Vec<InvalidRecord>,
    rule_frequency: BTreeMap<RuleKind, usize>,
    field_frequency: BTreeMap<FieldId, usize>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into the result.
    pub fn push(&mut self, outcome: ValidationOutcome) {
        let (record, errors) = outcome.into_parts();
        if errors.is_empty() {
            self.valid_records.push(record);
            return;
        }
        for error in &errors {
            *self.rule_frequency.entry(error.rule).or_default() += 1;
            *self.field_frequency.entry(error.field).or_default() += 1;
        }
        self.invalid_records.push(InvalidRecord { record, errors });
    }

    /// Append a result computed for the records that follow this one.
    pub fn merge(&mut self, other: BatchResult) {
        self.valid_records.extend(other.valid_records);
        self.invalid_records.extend(other.invalid_records);
        for (rule, count) in other.rule_frequency {
            *self.rule_frequency.entry(rule).or_default() += count;
        }
        for (field, count) in other.field_frequency {
            *self.field_frequency.entry(field).or_default() += count;
        }
    }

    pub fn valid_records(&self) -> &[Record] {
        &self.valid_records
    }

    pub fn invalid_records(&self) -> &[InvalidRecord] {
        &self.invalid_records
    }

    pub fn rule_frequency(&self) -> &BTreeMap<RuleKind, usize> {
        &self.rule_frequency
    }

    pub fn field_frequency(&self) -> &BTreeMap<FieldId, usize> {
        &self.field_frequency
    }

    pub fn valid_count(&self) -> usize {
        self.valid_records.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_records.len()
    }

    pub fn total_count(&self) -> usize {
        self.valid_count() + self.invalid_count()
    }

    /// Total number of individual errors.
    pub fn error_count(&self) -> usize {
        self.rule_frequency.values().sum()
    }
}

/// Validates record sequences.
#[derive(Debug, Clone, Copy)]
pub struct BatchProcessor {
    validator: Validator,
}

impl BatchProcessor {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate records in input order.
    pub fn process<I>(&self, records: I) -> BatchResult
    where
        I: IntoIterator<Item = Record>,
    {
        let mut result = BatchResult::new();
        for (index, record) in records.into_iter().enumerate() {
            let outcome = self.validator.validate(record);
            if !outcome.is_valid() {
                debug!(
                    row = index + 1,
                    error_count = outcome.errors().len(),
                    "record failed validation"
                );
            }
            result.push(outcome);
        }
        info!(
            total = result.total_count(),
            valid = result.valid_count(),
            invalid = result.invalid_count(),
            "batch validated"
        );
        result
    }

    /// Validate contiguous shards on worker threads.
    ///
    /// Partial results are merged in shard order, so the output is identical
    /// to [`BatchProcessor::process`].
    pub fn process_parallel(&self, records: Vec<Record>, workers: usize) -> BatchResult {
        if workers <= 1 || records.len() < 2 {
            return self.process(records);
        }

        let chunk_size = records.len().div_ceil(workers);
        let validator = self.validator;
        let partials: Vec<BatchResult> = thread::scope(|scope| {
            let handles: Vec<_> = records
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        let mut partial = BatchResult::new();
                        for record in chunk {
                            partial.push(validator.validate(record.clone()));
                        }
                        partial
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        debug!(workers, shards = partials.len(), "merging shard results");
        let mut result = BatchResult::new();
        for partial in partials {
            result.merge(partial);
        }
        info!(
            total = result.total_count(),
            valid = result.valid_count(),
            invalid = result.invalid_count(),
            "batch validated"
        );
        result
    }
}
