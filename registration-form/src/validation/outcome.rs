//! Per-field results and the aggregated outcome of one submit attempt

use serde::Serialize;

use crate::types::{FieldId, SanitizedSubmission};
use crate::validation::FieldError;

/// Result of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub field: FieldId,
    pub error: Option<FieldError>,
}

impl FieldResult {
    pub fn valid(field: FieldId) -> Self {
        Self { field, error: None }
    }

    pub fn from_rule(field: FieldId, result: Result<(), FieldError>) -> Self {
        Self {
            field,
            error: result.err(),
        }
    }

    /// Message to render in the field's error slot, empty when valid
    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .map(|error| error.to_string())
            .unwrap_or_default()
    }

    /// Value of the input's invalid-state flag
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Serialized view used by display layers
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldReport {
    pub field: FieldId,
    pub message: String,
    pub invalid: bool,
}

impl From<&FieldResult> for FieldReport {
    fn from(result: &FieldResult) -> Self {
        Self {
            field: result.field,
            message: result.message(),
            invalid: result.is_invalid(),
        }
    }
}

/// Every field's result for one submission, in fixed field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    submission: SanitizedSubmission,
    results: Vec<FieldResult>,
}

impl ValidationOutcome {
    /// Build an outcome; results are reordered into fixed field order
    pub fn new(submission: SanitizedSubmission, mut results: Vec<FieldResult>) -> Self {
        results.sort_by_key(|result| result.field);
        Self {
            submission,
            results,
        }
    }

    pub fn results(&self) -> &[FieldResult] {
        &self.results
    }

    /// Normalized values the outcome was computed from
    pub fn submission(&self) -> &SanitizedSubmission {
        &self.submission
    }

    /// True iff no field carries an error message
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|result| result.message().is_empty())
    }

    /// First failing field in fixed order, which is where focus goes
    pub fn first_invalid(&self) -> Option<&FieldResult> {
        self.results.iter().find(|result| !result.message().is_empty())
    }

    pub fn result_for(&self, field: FieldId) -> Option<&FieldResult> {
        self.results.iter().find(|result| result.field == field)
    }

    /// Failing results only, in fixed order
    pub fn errors(&self) -> impl Iterator<Item = &FieldResult> {
        self.results.iter().filter(|result| result.is_invalid())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn reports(&self) -> Vec<FieldReport> {
        self.results.iter().map(FieldReport::from).collect()
    }
}
