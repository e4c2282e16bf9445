//! Validation rules for registration submissions
//!
//! Each form field has its own rule validator. The submission validator runs
//! all five in fixed field order and collects every failure, so the form can
//! flag all invalid fields at once.

pub mod errors;
pub mod fields;
pub mod outcome;
pub mod submission;
pub mod traits;

// Re-export main validation types
pub use errors::{FieldError, FieldRuleResult};
pub use outcome::{FieldReport, FieldResult, ValidationOutcome};
pub use submission::{validate_submission, SubmissionValidator};
pub use traits::{FieldValidator, ValidationContext};
