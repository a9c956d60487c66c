//! Field rules shared by several forms

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::FieldError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Fail with `message` when the value is blank after trimming
pub fn require_trimmed(value: &str, message: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(message));
    }
    Ok(())
}

/// Fail with `message` when the value is empty. Whitespace counts as content.
pub fn require_present(value: &str, message: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required(message));
    }
    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be blank
/// - One `@`, no whitespace, a dot somewhere after the `@`
///
/// The pattern is tested against the raw value, so surrounding
/// whitespace makes an otherwise valid address fail.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    require_trimmed(email, "Email is required")?;

    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::format("Please enter a valid email address"));
    }

    Ok(())
}
