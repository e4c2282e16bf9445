use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::fields::normalize_full_name;

/// Identifies one of the five registration form fields.
///
/// The declaration order is the fixed field order used for result ordering
/// and for choosing which field receives focus after a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    BirthDate,
    Terms,
}

impl FieldId {
    /// All fields in fixed validation order
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::BirthDate,
        FieldId::Terms,
    ];

    /// Element id of the input bound to this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::BirthDate => "birthDate",
            FieldId::Terms => "terms",
        }
    }

    /// Element id of the slot that displays this field's error message
    pub fn error_slot(&self) -> &'static str {
        match self {
            FieldId::FullName => "err-fullName",
            FieldId::Email => "err-email",
            FieldId::Phone => "err-phone",
            FieldId::BirthDate => "err-birthDate",
            FieldId::Terms => "err-terms",
        }
    }

    /// Human readable label, used in "required" messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone number",
            FieldId::BirthDate => "Birth date",
            FieldId::Terms => "Terms",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Raw values read from the form on a submit attempt.
///
/// Nothing here is normalized yet. A fresh value is supplied for every
/// attempt and the core never keeps it around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    #[serde(alias = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(alias = "birthDate")]
    pub birth_date: String,
    #[serde(alias = "acceptedTerms", alias = "terms")]
    pub accepted_terms: bool,
}

/// Submission values after normalization.
///
/// The full name is trimmed with internal whitespace runs collapsed, email
/// and phone are trimmed, and the birth date is kept as entered. These are
/// the values written back to the inputs and stored in accepted records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub accepted_terms: bool,
}

impl SanitizedSubmission {
    pub fn from_raw(raw: &RawSubmission) -> Self {
        Self {
            full_name: normalize_full_name(&raw.full_name),
            email: raw.email.trim().to_string(),
            phone: raw.phone.trim().to_string(),
            birth_date: raw.birth_date.clone(),
            accepted_terms: raw.accepted_terms,
        }
    }
}

impl From<&RawSubmission> for SanitizedSubmission {
    fn from(raw: &RawSubmission) -> Self {
        Self::from_raw(raw)
    }
}

impl From<SanitizedSubmission> for RawSubmission {
    fn from(submission: SanitizedSubmission) -> Self {
        Self {
            full_name: submission.full_name,
            email: submission.email,
            phone: submission.phone,
            birth_date: submission.birth_date,
            accepted_terms: submission.accepted_terms,
        }
    }
}

/// A row of the submissions table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedRecord {
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
}

impl AcceptedRecord {
    pub fn new(timestamp: impl Into<String>, submission: &SanitizedSubmission) -> Self {
        Self {
            timestamp: timestamp.into(),
            full_name: submission.full_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            birth_date: submission.birth_date.clone(),
        }
    }

    /// Cell values in table column order
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.timestamp,
            &self.full_name,
            &self.email,
            &self.phone,
            &self.birth_date,
        ]
    }
}

/// Tunable limits for the field rules.
///
/// Defaults reproduce the stock form: two words of two characters for the
/// name, 7 to 15 phone digits, a minimum age of 13 and a dotted email domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Minimum number of words in the full name
    pub min_name_words: usize,
    /// Minimum characters per full name word
    pub min_word_length: usize,
    /// Minimum digits in a phone number
    pub phone_min_digits: usize,
    /// Maximum digits in a phone number
    pub phone_max_digits: usize,
    /// Minimum age in years on the day of submission
    pub minimum_age_years: u32,
    /// Whether the email domain must contain at least one dot
    pub require_dotted_domain: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_name_words: 2,
            min_word_length: 2,
            phone_min_digits: 7,
            phone_max_digits: 15,
            minimum_age_years: 13,
            require_dotted_domain: true,
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_words == 0 {
            return Err(ConfigError::Invalid(
                "min_name_words must be greater than 0".to_string(),
            ));
        }

        if self.min_word_length == 0 {
            return Err(ConfigError::Invalid(
                "min_word_length must be greater than 0".to_string(),
            ));
        }

        if self.phone_min_digits == 0 {
            return Err(ConfigError::Invalid(
                "phone_min_digits must be greater than 0".to_string(),
            ));
        }

        if self.phone_min_digits > self.phone_max_digits {
            return Err(ConfigError::DigitRange {
                min: self.phone_min_digits,
                max: self.phone_max_digits,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid registration config: {0}\n💡 All limits must be positive whole numbers")]
    Invalid(String),

    #[error("Invalid phone digit range: minimum {min} exceeds maximum {max}\n💡 Set phone_min_digits <= phone_max_digits")]
    DigitRange { min: usize, max: usize },
}
