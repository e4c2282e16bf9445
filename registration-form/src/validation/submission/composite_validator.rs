//! Composite validator that runs every field rule over a submission

use chrono::NaiveDate;

use crate::types::{FieldId, RawSubmission, RegistrationConfig, SanitizedSubmission};
use crate::validation::fields::{
    BirthDateValidator, EmailValidator, FullNameValidator, PhoneValidator, TermsValidator,
};
use crate::validation::{FieldResult, FieldValidator, ValidationContext, ValidationOutcome};

/// Composite validator that evaluates a complete registration submission
///
/// This validator combines:
/// - Full name validation (word count and word length)
/// - Email validation (syntax check plus shape heuristics)
/// - Phone validation (allowed characters and digit count)
/// - Birth date validation (real date, not in the future, minimum age)
/// - Terms acceptance
///
/// Every field is evaluated on every call, so all errors surface together.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    config: RegistrationConfig,
    full_name_validator: FullNameValidator,
    email_validator: EmailValidator,
    phone_validator: PhoneValidator,
    birth_date_validator: BirthDateValidator,
    terms_validator: TermsValidator,
}

impl SubmissionValidator {
    /// Create a new submission validator with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistrationConfig::default())
    }

    /// Create a submission validator with custom configuration
    pub fn with_config(config: RegistrationConfig) -> Self {
        Self {
            config,
            full_name_validator: FullNameValidator::new(),
            email_validator: EmailValidator::new(),
            phone_validator: PhoneValidator::new(),
            birth_date_validator: BirthDateValidator::new(),
            terms_validator: TermsValidator::new(),
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn full_name_validator(&self) -> &FullNameValidator {
        &self.full_name_validator
    }

    pub fn email_validator(&self) -> &EmailValidator {
        &self.email_validator
    }

    pub fn phone_validator(&self) -> &PhoneValidator {
        &self.phone_validator
    }

    pub fn birth_date_validator(&self) -> &BirthDateValidator {
        &self.birth_date_validator
    }

    pub fn terms_validator(&self) -> &TermsValidator {
        &self.terms_validator
    }

    /// Sanitize and validate a raw submission against `today`
    pub fn validate(&self, raw: &RawSubmission, today: NaiveDate) -> ValidationOutcome {
        self.validate_sanitized(SanitizedSubmission::from_raw(raw), today)
    }

    /// Validate values that have already been normalized
    pub fn validate_sanitized(
        &self,
        submission: SanitizedSubmission,
        today: NaiveDate,
    ) -> ValidationOutcome {
        let ctx = ValidationContext::new(today, &self.config);

        let results = vec![
            FieldResult::from_rule(
                FieldId::FullName,
                self.full_name_validator
                    .validate(&ctx, submission.full_name.as_str()),
            ),
            FieldResult::from_rule(
                FieldId::Email,
                self.email_validator.validate(&ctx, submission.email.as_str()),
            ),
            FieldResult::from_rule(
                FieldId::Phone,
                self.phone_validator.validate(&ctx, submission.phone.as_str()),
            ),
            FieldResult::from_rule(
                FieldId::BirthDate,
                self.birth_date_validator
                    .validate(&ctx, submission.birth_date.as_str()),
            ),
            FieldResult::from_rule(
                FieldId::Terms,
                self.terms_validator
                    .validate(&ctx, &submission.accepted_terms),
            ),
        ];

        ValidationOutcome::new(submission, results)
    }
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a submission with the default configuration
pub fn validate_submission(raw: &RawSubmission, today: NaiveDate) -> ValidationOutcome {
    SubmissionValidator::new().validate(raw, today)
}
