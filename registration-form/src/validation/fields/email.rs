//! Email address validation
//!
//! Two tiers: a lenient syntax check equivalent to the browser's
//! `type=email` constraint, then heuristics that reject consecutive dots
//! and anything other than exactly one '@'.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::FieldId;
use crate::validation::{FieldError, FieldRuleResult, FieldValidator, ValidationContext};

const LOCAL_PART: &str = r"[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+";
const DOMAIN_LABEL: &str = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";

#[derive(Debug, Clone)]
pub struct EmailValidator {
    lenient: Regex,
    dotted: Regex,
}

impl EmailValidator {
    pub fn new() -> Self {
        let lenient = format!(r"^{LOCAL_PART}@{DOMAIN_LABEL}(?:\.{DOMAIN_LABEL})*$");
        let dotted = format!(r"^{LOCAL_PART}@{DOMAIN_LABEL}(?:\.{DOMAIN_LABEL})+$");
        Self {
            lenient: Regex::new(&lenient).expect("lenient email pattern compiles"),
            dotted: Regex::new(&dotted).expect("dotted email pattern compiles"),
        }
    }

    fn passes_syntax_check(&self, ctx: &ValidationContext<'_>, email: &str) -> bool {
        if ctx.config.require_dotted_domain {
            self.dotted.is_match(email)
        } else {
            self.lenient.is_match(email)
        }
    }

    fn has_suspicious_shape(email: &str) -> bool {
        email.contains("..") || email.matches('@').count() != 1
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, ctx: &ValidationContext<'_>, value: &str) -> FieldRuleResult {
        let email = value.trim();
        if email.is_empty() {
            return Err(FieldError::required(FieldId::Email));
        }

        if !self.passes_syntax_check(ctx, email) {
            return Err(FieldError::InvalidEmail);
        }

        if Self::has_suspicious_shape(email) {
            return Err(FieldError::MalformedEmail);
        }

        Ok(())
    }
}

pub fn validate_email(raw: &str) -> FieldRuleResult {
    static VALIDATOR: OnceLock<EmailValidator> = OnceLock::new();
    VALIDATOR
        .get_or_init(EmailValidator::new)
        .validate(&ValidationContext::undated(), raw)
}
