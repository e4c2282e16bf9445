//! Field validation error types

use crate::types::FieldId;

/// A rule a field value failed.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field left empty
    #[error("{} is required.", .0.label())]
    Required(FieldId),

    /// Full name has fewer words than required
    #[error("Please enter at least {min} words.")]
    TooFewWords { min: usize },

    /// A full name word is shorter than allowed
    #[error("Each word must be at least {min} characters.")]
    WordTooShort { min: usize },

    /// Email failed the lenient syntax check
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Email passed the syntax check but has consecutive dots or not exactly one '@'
    #[error("Email format looks invalid.")]
    MalformedEmail,

    /// Phone contains characters other than digits, spaces, dashes and a leading '+'
    #[error("Use only numbers, spaces, dashes, and an optional leading +.")]
    InvalidPhoneCharacters,

    /// Phone contains a '+' that is not its first character
    #[error("If you include a country code, the + must be at the start.")]
    MisplacedPlus,

    /// Phone digit count outside the allowed range
    #[error("Phone number needs between {min} and {max} digits.")]
    PhoneDigitCount { min: usize, max: usize },

    /// Birth date is not a calendar date
    #[error("Please choose a valid date.")]
    InvalidDate,

    /// Birth date is after today
    #[error("Birth date cannot be in the future.")]
    FutureDate,

    /// Applicant is younger than the minimum age
    #[error("You must be at least {min_age} years old.")]
    TooYoung { min_age: u32 },

    /// Terms checkbox left unchecked
    #[error("You must accept the terms.")]
    TermsNotAccepted,
}

impl FieldError {
    /// Create a required-field error
    pub fn required(field: FieldId) -> Self {
        Self::Required(field)
    }

    /// Whether this error means the field was left empty
    pub fn is_required(&self) -> bool {
        matches!(self, FieldError::Required(_))
    }
}

/// Result type for a single field rule
pub type FieldRuleResult<T = ()> = Result<T, FieldError>;
