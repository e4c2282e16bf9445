//! Core validation traits and interfaces

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::types::RegistrationConfig;
use crate::validation::FieldError;

fn default_config() -> &'static RegistrationConfig {
    static DEFAULT: OnceLock<RegistrationConfig> = OnceLock::new();
    DEFAULT.get_or_init(RegistrationConfig::default)
}

/// Inputs shared by every field rule for one validation pass
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Calendar day the submission is evaluated against
    pub today: NaiveDate,
    pub config: &'a RegistrationConfig,
}

impl<'a> ValidationContext<'a> {
    pub fn new(today: NaiveDate, config: &'a RegistrationConfig) -> Self {
        Self { today, config }
    }
}

impl ValidationContext<'static> {
    /// Context using the default limits
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self::new(today, default_config())
    }

    /// Default context for rules that never look at the date
    pub(crate) fn undated() -> Self {
        Self::with_defaults(NaiveDate::default())
    }
}

/// Core validation trait that all field validators implement
pub trait FieldValidator<Input: ?Sized> {
    fn validate(&self, ctx: &ValidationContext<'_>, value: &Input) -> Result<(), FieldError>;
}
