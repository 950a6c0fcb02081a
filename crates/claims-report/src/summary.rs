//! Report summary built from a batch result.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use claims_model::{FieldId, RuleKind};
use claims_validate::BatchResult;
use serde::{Deserialize, Serialize};

/// Run-level counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub timestamp: DateTime<Utc>,
    pub total_records_processed: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    /// `None` when no records were processed.
    pub percent_records_valid: Option<f64>,
}

/// Display-ready summary; the single input for every report writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub summary: SummaryCounts,
    /// Error count per rule kind, keyed by machine name.
    pub validation_issues: BTreeMap<RuleKind, usize>,
    /// Error count per field, keyed by machine name.
    pub fields_with_issues: BTreeMap<FieldId, usize>,
}

impl ReportSummary {
    pub fn from_batch(batch: &BatchResult, generated_at: DateTime<Utc>) -> Self {
        let valid = batch.valid_count();
        let invalid = batch.invalid_count();
        let total = valid + invalid;
        Self {
            summary: SummaryCounts {
                timestamp: generated_at,
                total_records_processed: total,
                valid_records: valid,
                invalid_records: invalid,
                percent_records_valid: percent_valid(valid, total),
            },
            validation_issues: batch.rule_frequency().clone(),
            fields_with_issues: batch.field_frequency().clone(),
        }
    }

    pub fn total(&self) -> usize {
        self.summary.total_records_processed
    }

    pub fn has_invalid(&self) -> bool {
        self.summary.invalid_records > 0
    }

    /// Percentage as text, `n/a` when undefined.
    pub fn percent_label(&self) -> String {
        match self.summary.percent_records_valid {
            Some(percent) => format!("{percent:.2}%"),
            None => "n/a".to_string(),
        }
    }
}

/// Percentage of valid records; undefined for an empty run.
pub fn percent_valid(valid: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(valid as f64 / total as f64 * 100.0)
}
