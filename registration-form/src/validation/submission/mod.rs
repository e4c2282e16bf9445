//! Whole-submission validation
//!
//! Combines the five field validators into one pass over a submission.

mod composite_validator;

pub use composite_validator::{validate_submission, SubmissionValidator};
