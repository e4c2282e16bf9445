mod common;

use common::TestHelper;
use registration_form::{
    validate_birth_date, validate_email, validate_full_name, validate_phone, validate_submission,
    validate_terms, FieldError, FieldId, FormState, RawSubmission,
};
use regex::Regex;

#[test]
fn test_full_name_examples() {
    assert!(validate_full_name("  John   Doe ").is_ok());
    assert_eq!(
        validate_full_name("John"),
        Err(FieldError::TooFewWords { min: 2 })
    );
    assert_eq!(
        validate_full_name("A B"),
        Err(FieldError::WordTooShort { min: 2 })
    );
    assert_eq!(
        validate_full_name(""),
        Err(FieldError::Required(FieldId::FullName))
    );
}

#[test]
fn test_email_examples() {
    assert!(validate_email("a@b.com").is_ok());
    assert!(validate_email("a..b@c.com").is_err());
    assert!(validate_email("a@@b.com").is_err());
    assert_eq!(
        validate_email(""),
        Err(FieldError::Required(FieldId::Email))
    );
}

#[test]
fn test_phone_examples() {
    assert!(validate_phone("+1 555-123-4567").is_ok());
    assert!(validate_phone("123").is_err());
    assert!(validate_phone("12-34+56").is_err());
    assert!(validate_phone("123456789012345678").is_err());
}

#[test]
fn test_birth_date_examples() {
    let today = TestHelper::today();
    assert!(validate_birth_date("2010-06-14", today).is_ok());
    assert_eq!(
        validate_birth_date("2012-06-16", today),
        Err(FieldError::TooYoung { min_age: 13 })
    );
    assert_eq!(
        validate_birth_date("2025-01-01", today),
        Err(FieldError::FutureDate)
    );
    assert_eq!(
        validate_birth_date("", today),
        Err(FieldError::Required(FieldId::BirthDate))
    );
}

#[test]
fn test_terms_examples() {
    assert_eq!(validate_terms(false), Err(FieldError::TermsNotAccepted));
    assert!(validate_terms(true).is_ok());
}

#[test]
fn test_all_valid_submission_yields_one_record() {
    TestHelper::init_tracing();
    let raw = TestHelper::valid_submission();

    let outcome = validate_submission(&raw, TestHelper::today());
    assert!(outcome.is_valid());
    assert!(outcome.first_invalid().is_none());

    let mut session = TestHelper::session();
    let result = session.submit(raw);
    assert!(result.is_accepted());
    assert_eq!(session.records().len(), 1);

    let record = &session.records()[0];
    assert_eq!(record.full_name, "John Doe");
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.phone, "+1 555-123-4567");
    assert_eq!(record.birth_date, "2010-06-14");

    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(pattern.is_match(&record.timestamp));
    assert_eq!(record.timestamp, "2024-06-15 14:03:09");
}

#[test]
fn test_missing_name_and_terms_reports_two_errors() {
    TestHelper::init_tracing();
    let raw = RawSubmission {
        full_name: String::new(),
        accepted_terms: false,
        ..TestHelper::valid_submission()
    };

    let outcome = validate_submission(&raw, TestHelper::today());
    let failing: Vec<FieldId> = outcome
        .results()
        .iter()
        .filter(|result| !result.message().is_empty())
        .map(|result| result.field)
        .collect();
    assert_eq!(failing, vec![FieldId::FullName, FieldId::Terms]);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.first_invalid().unwrap().field, FieldId::FullName);

    let mut session = TestHelper::session();
    assert!(!session.submit(raw).is_accepted());
    assert!(session.records().is_empty());
    assert_eq!(session.focus(), Some(FieldId::FullName));
}

#[test]
fn test_reject_then_correct_then_reset() {
    TestHelper::init_tracing();
    let mut session = TestHelper::session();

    let bad = RawSubmission {
        phone: "555.123.4567".to_string(),
        ..TestHelper::valid_submission()
    };
    let result = session.submit(bad);
    assert_eq!(session.last_transition(), Some(FormState::Rejected));
    assert_eq!(
        result.validation().unwrap().first_invalid().unwrap().message(),
        "Use only numbers, spaces, dashes, and an optional leading +."
    );
    assert_eq!(session.fields().full_name, "John Doe");

    let mut corrected = session.fields().clone();
    corrected.phone = "555-123-4567".to_string();
    assert!(session.submit(corrected).is_accepted());
    assert_eq!(session.last_transition(), Some(FormState::Accepted));
    assert_eq!(session.fields(), &RawSubmission::default());

    session.submit(RawSubmission::default());
    assert_eq!(session.invalid_fields().len(), 5);
    session.reset();
    assert!(session.invalid_fields().is_empty());
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.state(), FormState::Editing);
}

#[test]
fn test_error_slots_and_messages_for_rendering() {
    let outcome = validate_submission(&RawSubmission::default(), TestHelper::today());
    let rendered: Vec<(&str, String)> = outcome
        .results()
        .iter()
        .map(|result| (result.field.error_slot(), result.message()))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("err-fullName", "Full name is required.".to_string()),
            ("err-email", "Email is required.".to_string()),
            ("err-phone", "Phone number is required.".to_string()),
            ("err-birthDate", "Birth date is required.".to_string()),
            ("err-terms", "You must accept the terms.".to_string()),
        ]
    );

    let json = serde_json::to_value(outcome.reports()).unwrap();
    assert_eq!(json[0]["field"], "fullName");
    assert_eq!(json[4]["invalid"], true);
}
