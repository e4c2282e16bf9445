mod common;

use common::TestHelper;
use proptest::prelude::*;
use registration_form::*;

// Property-based test generators

prop_compose! {
    fn arb_name_word()(word in "[A-Za-z]{1,8}") -> String {
        word
    }
}

prop_compose! {
    fn arb_messy_full_name()(
        words in prop::collection::vec(arb_name_word(), 0..5),
        gaps in prop::collection::vec("[ \t\n]{1,4}", 6)
    ) -> String {
        let mut name = gaps[0].clone();
        for (i, word) in words.iter().enumerate() {
            name.push_str(word);
            name.push_str(&gaps[i + 1]);
        }
        name
    }
}

prop_compose! {
    fn arb_birth_date()(days_before in -400i64..20_000) -> String {
        (TestHelper::today() - chrono::Duration::days(days_before))
            .format("%Y-%m-%d")
            .to_string()
    }
}

prop_compose! {
    fn arb_raw_submission()(
        full_name in prop_oneof![arb_messy_full_name(), ".{0,30}"],
        email in prop_oneof!["[a-z.]{0,8}@[a-z]{1,6}(\\.[a-z]{2,3}){0,2}", ".{0,20}"],
        phone in prop_oneof!["\\+?[0-9 -]{0,20}", ".{0,20}"],
        birth_date in prop_oneof![arb_birth_date(), ".{0,12}"],
        accepted_terms in any::<bool>()
    ) -> RawSubmission {
        RawSubmission {
            full_name,
            email,
            phone,
            birth_date,
            accepted_terms,
        }
    }
}

// Property-based tests

proptest! {
    #[test]
    fn test_validation_is_idempotent(raw in arb_raw_submission()) {
        let first = validate_submission(&raw, TestHelper::today());
        let second = validate_submission(&raw, TestHelper::today());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_is_valid_iff_all_messages_empty(raw in arb_raw_submission()) {
        let outcome = validate_submission(&raw, TestHelper::today());
        let all_empty = outcome.results().iter().all(|r| r.message().is_empty());
        prop_assert_eq!(outcome.is_valid(), all_empty);
        prop_assert_eq!(outcome.first_invalid().is_none(), outcome.is_valid());
    }

    #[test]
    fn test_first_invalid_is_earliest_failure(raw in arb_raw_submission()) {
        let outcome = validate_submission(&raw, TestHelper::today());
        let expected = outcome
            .results()
            .iter()
            .find(|r| !r.message().is_empty())
            .map(|r| r.field);
        prop_assert_eq!(outcome.first_invalid().map(|r| r.field), expected);
    }

    #[test]
    fn test_results_always_in_fixed_order(raw in arb_raw_submission()) {
        let outcome = validate_submission(&raw, TestHelper::today());
        let order: Vec<FieldId> = outcome.results().iter().map(|r| r.field).collect();
        prop_assert_eq!(order, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_normalized_name_has_single_spaces(name in arb_messy_full_name()) {
        let normalized = normalize_full_name(&name);
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
        prop_assert_eq!(normalize_full_name(&normalized), normalized.clone());
    }

    #[test]
    fn test_phone_digit_bounds(digits in "[0-9]{1,20}") {
        let result = validate_phone(&digits);
        let in_range = (7..=15).contains(&digits.len());
        prop_assert_eq!(result.is_ok(), in_range);
    }

    #[test]
    fn test_session_records_only_valid_submissions(
        submissions in prop::collection::vec(arb_raw_submission(), 1..8)
    ) {
        let mut session = TestHelper::session();
        let mut expected = 0;
        for raw in submissions {
            if validate_submission(&raw, TestHelper::today()).is_valid() {
                expected += 1;
            }
            session.submit(raw);
            prop_assert_eq!(session.state(), FormState::Editing);
        }
        prop_assert_eq!(session.records().len(), expected);
    }
}
