//! Birth date validation

use chrono::NaiveDate;

use crate::types::FieldId;
use crate::validation::{FieldError, FieldRuleResult, FieldValidator, ValidationContext};

/// Input format produced by a date picker
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Average year length used for the age check
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Validates that the birth date is a real, non-future date old enough to
/// register.
///
/// Age is `days / 365.25` rather than calendar years, so results within a
/// day of a birthday can differ from a calendar-aware calculation.
#[derive(Debug, Default, Clone)]
pub struct BirthDateValidator;

impl BirthDateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).ok()
    }

    /// Approximate age in years on `today`
    pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> f64 {
        (today - birth).num_days() as f64 / DAYS_PER_YEAR
    }
}

impl FieldValidator<str> for BirthDateValidator {
    fn validate(&self, ctx: &ValidationContext<'_>, value: &str) -> FieldRuleResult {
        if value.is_empty() {
            return Err(FieldError::required(FieldId::BirthDate));
        }

        let birth = Self::parse(value).ok_or(FieldError::InvalidDate)?;

        if birth > ctx.today {
            return Err(FieldError::FutureDate);
        }

        let min_age = ctx.config.minimum_age_years;
        if Self::age_in_years(birth, ctx.today) < f64::from(min_age) {
            return Err(FieldError::TooYoung { min_age });
        }

        Ok(())
    }
}

pub fn validate_birth_date(raw: &str, today: NaiveDate) -> FieldRuleResult {
    BirthDateValidator::new().validate(&ValidationContext::with_defaults(today), raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegistrationConfig;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_adult_birth_date_passes() {
        assert!(validate_birth_date("2010-06-14", today()).is_ok());
        assert!(validate_birth_date("1970-01-01", today()).is_ok());
    }

    #[test]
    fn test_empty_birth_date_is_required() {
        assert_eq!(
            validate_birth_date("", today()),
            Err(FieldError::required(FieldId::BirthDate))
        );
    }

    #[test]
    fn test_unparseable_dates() {
        for value in ["not-a-date", "2024-02-30", "2024-13-01", "15/06/2010", " "] {
            assert_eq!(
                validate_birth_date(value, today()),
                Err(FieldError::InvalidDate),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_future_date_fails() {
        assert_eq!(
            validate_birth_date("2025-01-01", today()),
            Err(FieldError::FutureDate)
        );
        assert_eq!(
            validate_birth_date("2024-06-16", today()),
            Err(FieldError::FutureDate)
        );
    }

    #[test]
    fn test_born_today_is_too_young_not_future() {
        assert_eq!(
            validate_birth_date("2024-06-15", today()),
            Err(FieldError::TooYoung { min_age: 13 })
        );
    }

    #[test]
    fn test_too_young() {
        assert_eq!(
            validate_birth_date("2012-06-16", today()),
            Err(FieldError::TooYoung { min_age: 13 })
        );
    }

    #[test]
    fn test_thirteenth_birthday_boundary() {
        // 4748 days / 365.25 is just under 13
        assert_eq!(
            validate_birth_date("2011-06-16", today()),
            Err(FieldError::TooYoung { min_age: 13 })
        );
        // 4749 days / 365.25 is just over 13
        assert!(validate_birth_date("2011-06-15", today()).is_ok());
    }

    #[test]
    fn test_average_year_approximation() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        let age = BirthDateValidator::age_in_years(birth, today);
        assert!((age - 365.0 / 365.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_minimum_age() {
        let config = RegistrationConfig {
            minimum_age_years: 18,
            ..Default::default()
        };
        let ctx = ValidationContext::new(today(), &config);
        let validator = BirthDateValidator::new();

        assert_eq!(
            validator.validate(&ctx, "2010-06-14"),
            Err(FieldError::TooYoung { min_age: 18 })
        );
        assert!(validator.validate(&ctx, "2000-01-01").is_ok());
    }
}
