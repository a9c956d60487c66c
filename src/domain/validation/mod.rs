//! Form validation primitives
//!
//! Every form validator in the domain returns a [`ValidationErrors`] map:
//! field name to message, empty when the input is acceptable.

mod errors;
mod rules;

pub use errors::{FieldError, ValidationErrorKind, ValidationErrors};
pub use rules::{require_present, require_trimmed, validate_email};
