//! Phone number validation

use std::sync::OnceLock;

use regex::Regex;

use crate::types::FieldId;
use crate::validation::{FieldError, FieldRuleResult, FieldValidator, ValidationContext};

/// Validates phone numbers: digits, spaces and dashes with an optional
/// leading '+', and a bounded number of digits.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    allowed: Regex,
}

impl PhoneValidator {
    pub fn new() -> Self {
        Self {
            allowed: Regex::new(r"^[+0-9][0-9\s-]*$").expect("phone pattern compiles"),
        }
    }

    /// Number of ASCII digits in the value
    pub fn digit_count(value: &str) -> usize {
        value.chars().filter(char::is_ascii_digit).count()
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator<str> for PhoneValidator {
    fn validate(&self, ctx: &ValidationContext<'_>, value: &str) -> FieldRuleResult {
        let phone = value.trim();
        if phone.is_empty() {
            return Err(FieldError::required(FieldId::Phone));
        }

        if !self.allowed.is_match(phone) {
            return Err(FieldError::InvalidPhoneCharacters);
        }

        if phone.contains('+') && !phone.starts_with('+') {
            return Err(FieldError::MisplacedPlus);
        }

        let digits = Self::digit_count(phone);
        let (min, max) = (ctx.config.phone_min_digits, ctx.config.phone_max_digits);
        if !(min..=max).contains(&digits) {
            return Err(FieldError::PhoneDigitCount { min, max });
        }

        Ok(())
    }
}

pub fn validate_phone(raw: &str) -> FieldRuleResult {
    static VALIDATOR: OnceLock<PhoneValidator> = OnceLock::new();
    VALIDATOR
        .get_or_init(PhoneValidator::new)
        .validate(&ValidationContext::undated(), raw)
}
