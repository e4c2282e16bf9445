pub mod clock;
pub mod session;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use types::*;

// Re-export the submission state machine
pub use session::{FormSession, FormState, SubmitOutcome};

// Re-export clock functionality
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};

// Re-export validation functionality
pub use validation::fields::{
    normalize_full_name, validate_birth_date, validate_email, validate_full_name, validate_phone,
    validate_terms,
};
pub use validation::{
    validate_submission, FieldError, FieldReport, FieldResult, FieldValidator, SubmissionValidator,
    ValidationContext, ValidationOutcome,
};
