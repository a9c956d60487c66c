//! Login form validation and the simulated credential check

use super::entity::{Credentials, Session, DEMO_ACCOUNTS};
use crate::domain::validation::{
    require_trimmed, validate_email, FieldError, ValidationErrorKind, ValidationErrors,
};

/// Looser than the change-password rule; both are kept as the product defines them
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub fn validate_login_password(password: &str) -> Result<(), FieldError> {
    require_trimmed(password, "Password is required")?;

    if password.chars().count() < MIN_LOGIN_PASSWORD_LENGTH {
        return Err(FieldError::format(format!(
            "Password must be at least {} characters",
            MIN_LOGIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

/// Field checks run before the sign-in is attempted
pub fn validate_login_form(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check("email", validate_email(&credentials.email));
    errors.check("password", validate_login_password(&credentials.password));
    errors
}

/// Match the pair against the demo accounts. Exact, case-sensitive comparison.
/// A miss marks both fields so neither reveals which one was wrong.
pub fn authenticate(credentials: &Credentials) -> Result<Session, ValidationErrors> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| {
            account.email == credentials.email && account.password == credentials.password
        })
        .map(|account| Session {
            email: account.email.to_string(),
            role: account.role,
        })
        .ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add("email", ValidationErrorKind::CredentialsInvalid, INVALID_CREDENTIALS_MESSAGE);
            errors.add("password", ValidationErrorKind::CredentialsInvalid, INVALID_CREDENTIALS_MESSAGE);
            errors
        })
}
