//! Rule validators for the individual form fields
//!
//! Each validator is usable on its own; the free functions run a validator
//! against the default configuration.

mod birth_date;
mod email;
mod full_name;
mod phone;
mod terms;

pub use birth_date::{validate_birth_date, BirthDateValidator};
pub use email::{validate_email, EmailValidator};
pub use full_name::{normalize_full_name, validate_full_name, FullNameValidator};
pub use phone::{validate_phone, PhoneValidator};
pub use terms::{validate_terms, TermsValidator};
