use chrono::{NaiveDate, NaiveDateTime};
use registration_form::{FixedClock, FormSession, RawSubmission, RegistrationConfig};

/// Test utilities and common setup functions

pub struct TestHelper;

#[allow(dead_code)]
impl TestHelper {
    /// The reference day used across the workspace tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub fn now() -> NaiveDateTime {
        Self::today().and_hms_opt(14, 3, 9).unwrap()
    }

    /// A submission where every field passes
    pub fn valid_submission() -> RawSubmission {
        RawSubmission {
            full_name: "  John   Doe ".to_string(),
            email: "a@b.com".to_string(),
            phone: "+1 555-123-4567".to_string(),
            birth_date: "2010-06-14".to_string(),
            accepted_terms: true,
        }
    }

    /// A form session pinned to [`TestHelper::now`]
    pub fn session() -> FormSession {
        FormSession::new(
            RegistrationConfig::default(),
            Box::new(FixedClock::new(Self::now())),
        )
        .unwrap()
    }

    /// Install a test subscriber so session logging is exercised
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }
}
