//! Terms acceptance validation

use crate::validation::{FieldError, FieldRuleResult, FieldValidator, ValidationContext};

#[derive(Debug, Default, Clone)]
pub struct TermsValidator;

impl TermsValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<bool> for TermsValidator {
    fn validate(&self, _ctx: &ValidationContext<'_>, accepted: &bool) -> FieldRuleResult {
        if *accepted {
            Ok(())
        } else {
            Err(FieldError::TermsNotAccepted)
        }
    }
}

pub fn validate_terms(accepted: bool) -> FieldRuleResult {
    TermsValidator::new().validate(&ValidationContext::undated(), &accepted)
}
