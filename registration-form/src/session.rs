//! Submission state machine for one registration form
//!
//! A [`FormSession`] owns everything the page used to keep in globals: the
//! editable field values, the error display, the focus target, the current
//! timestamp and the accepted-records table.

use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::types::{AcceptedRecord, ConfigError, FieldId, RawSubmission, RegistrationConfig};
use crate::validation::{FieldResult, SubmissionValidator, ValidationOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Waiting for user input
    Editing,
    /// A submit attempt is being evaluated
    Validating,
    /// The last attempt failed validation
    Rejected,
    /// The last attempt was appended to the table
    Accepted,
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormState::Editing => "editing",
            FormState::Validating => "validating",
            FormState::Rejected => "rejected",
            FormState::Accepted => "accepted",
        }
    }

    fn can_transition_to(self, next: FormState) -> bool {
        matches!(
            (self, next),
            (FormState::Editing, FormState::Validating)
                | (FormState::Editing, FormState::Editing)
                | (FormState::Validating, FormState::Rejected)
                | (FormState::Validating, FormState::Accepted)
                | (FormState::Rejected, FormState::Editing)
                | (FormState::Accepted, FormState::Editing)
        )
    }
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a submit attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(AcceptedRecord),
    Rejected(ValidationOutcome),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn record(&self) -> Option<&AcceptedRecord> {
        match self {
            SubmitOutcome::Accepted(record) => Some(record),
            SubmitOutcome::Rejected(_) => None,
        }
    }

    pub fn validation(&self) -> Option<&ValidationOutcome> {
        match self {
            SubmitOutcome::Accepted(_) => None,
            SubmitOutcome::Rejected(outcome) => Some(outcome),
        }
    }
}

pub struct FormSession {
    validator: SubmissionValidator,
    clock: Box<dyn Clock>,
    fields: RawSubmission,
    errors: Vec<FieldResult>,
    focus: Option<FieldId>,
    timestamp: String,
    records: Vec<AcceptedRecord>,
    state: FormState,
    last_transition: Option<FormState>,
}

impl FormSession {
    pub fn new(config: RegistrationConfig, clock: Box<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;

        let timestamp = format_timestamp(clock.now());
        Ok(Self {
            validator: SubmissionValidator::with_config(config),
            clock,
            fields: RawSubmission::default(),
            errors: Self::cleared_errors(),
            focus: Some(FieldId::FullName),
            timestamp,
            records: Vec::new(),
            state: FormState::Editing,
            last_transition: None,
        })
    }

    pub fn with_system_clock(config: RegistrationConfig) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(SystemClock))
    }

    /// Run one submit attempt.
    ///
    /// Every field is validated. On rejection the sanitized values stay in
    /// the fields, every error is shown and focus moves to the first invalid
    /// field. On acceptance a record is appended, the fields and errors are
    /// cleared and focus returns to the full name.
    pub fn submit(&mut self, raw: RawSubmission) -> SubmitOutcome {
        self.clear_errors();
        self.transition(FormState::Validating);

        let now = self.clock.now();
        self.timestamp = format_timestamp(now);

        let outcome = self.validator.validate(&raw, now.date());
        let sanitized = outcome.submission().clone();
        self.fields = RawSubmission::from(sanitized.clone());
        self.errors = outcome.results().to_vec();

        if let Some(first) = outcome.first_invalid() {
            debug!(
                "Submission rejected: {} invalid field(s), focusing {}",
                outcome.error_count(),
                first.field
            );
            self.focus = Some(first.field);
            self.transition(FormState::Rejected);
            self.transition(FormState::Editing);
            return SubmitOutcome::Rejected(outcome);
        }

        let record = AcceptedRecord::new(self.timestamp.clone(), &sanitized);
        self.records.push(record.clone());
        info!(
            "Accepted submission at {}, {} record(s) in table",
            record.timestamp,
            self.records.len()
        );

        self.transition(FormState::Accepted);
        self.fields = RawSubmission::default();
        self.clear_errors();
        self.refresh_timestamp();
        self.focus = Some(FieldId::FullName);
        self.transition(FormState::Editing);

        SubmitOutcome::Accepted(record)
    }

    /// Manual form reset.
    ///
    /// The field values are reset first, then errors and invalid flags are
    /// cleared and a fresh timestamp is taken. Nothing is validated and the
    /// table is untouched.
    pub fn reset(&mut self) {
        self.fields = RawSubmission::default();

        self.clear_errors();
        self.refresh_timestamp();
        self.transition(FormState::Editing);
        debug!("Form reset, {} record(s) kept", self.records.len());
    }

    pub fn config(&self) -> &RegistrationConfig {
        self.validator.config()
    }

    /// Current values of the editable inputs
    pub fn fields(&self) -> &RawSubmission {
        &self.fields
    }

    /// Error display for every field, in fixed field order
    pub fn errors(&self) -> &[FieldResult] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(FieldResult::is_invalid)
    }

    /// Fields currently flagged invalid
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.errors
            .iter()
            .filter(|result| result.is_invalid())
            .map(|result| result.field)
            .collect()
    }

    pub fn focus(&self) -> Option<FieldId> {
        self.focus
    }

    /// Timestamp currently shown on the form
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Accepted records, oldest first
    pub fn records(&self) -> &[AcceptedRecord] {
        &self.records
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Outcome of the most recent submit attempt, if any
    pub fn last_transition(&self) -> Option<FormState> {
        self.last_transition
    }

    fn cleared_errors() -> Vec<FieldResult> {
        FieldId::ALL.into_iter().map(FieldResult::valid).collect()
    }

    fn clear_errors(&mut self) {
        self.errors = Self::cleared_errors();
    }

    fn refresh_timestamp(&mut self) {
        self.timestamp = format_timestamp(self.clock.now());
    }

    fn transition(&mut self, next: FormState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal form transition {} -> {}",
            self.state,
            next
        );
        if matches!(next, FormState::Rejected | FormState::Accepted) {
            self.last_transition = Some(next);
        }
        self.state = next;
    }
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("state", &self.state)
            .field("fields", &self.fields)
            .field("focus", &self.focus)
            .field("timestamp", &self.timestamp)
            .field("records", &self.records.len())
            .finish()
    }
}
