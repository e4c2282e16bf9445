//! Full name validation

use crate::types::FieldId;
use crate::validation::{FieldError, FieldRuleResult, FieldValidator, ValidationContext};

/// Trim and collapse every internal whitespace run to a single space.
///
/// The result is also the value stored for the field.
pub fn normalize_full_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validates that the full name has enough words of sufficient length
#[derive(Debug, Default, Clone)]
pub struct FullNameValidator;

impl FullNameValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for FullNameValidator {
    fn validate(&self, ctx: &ValidationContext<'_>, value: &str) -> FieldRuleResult {
        let name = normalize_full_name(value);
        if name.is_empty() {
            return Err(FieldError::required(FieldId::FullName));
        }

        let words: Vec<&str> = name.split(' ').filter(|word| !word.is_empty()).collect();
        if words.len() < ctx.config.min_name_words {
            return Err(FieldError::TooFewWords {
                min: ctx.config.min_name_words,
            });
        }

        // Length is in Unicode scalar values, so a single astral character
        // is one character long
        if words
            .iter()
            .any(|word| word.chars().count() < ctx.config.min_word_length)
        {
            return Err(FieldError::WordTooShort {
                min: ctx.config.min_word_length,
            });
        }

        Ok(())
    }
}

/// Validate a full name with the default limits
pub fn validate_full_name(raw: &str) -> FieldRuleResult {
    FullNameValidator::new().validate(&ValidationContext::undated(), raw)
}
