use super::{PasswordChangeForm, ProfileForm};
use crate::domain::validation::{
    require_present, require_trimmed, validate_email, FieldError, ValidationErrors,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_profile(form: &ProfileForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check("name", require_trimmed(&form.name, "Name is required"));
    errors.check("email", validate_email(&form.email));
    errors
}

/// Validate a new password
///
/// Rules:
/// - Cannot be empty
/// - Minimum 8 characters
/// - At least one ASCII lowercase letter, one ASCII uppercase letter and one ASCII digit
pub fn validate_new_password(password: &str) -> Result<(), FieldError> {
    require_present(password, "New password is required")?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::format(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_lower && has_upper && has_digit) {
        return Err(FieldError::format(
            "Password must contain uppercase, lowercase, and number",
        ));
    }

    Ok(())
}

pub fn validate_password_change(form: &PasswordChangeForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    errors.check(
        "current_password",
        require_present(&form.current_password, "Current password is required"),
    );
    errors.check("new_password", validate_new_password(&form.new_password));

    let confirmation = require_present(&form.confirm_password, "Please confirm your password")
        .and_then(|_| {
            if form.new_password == form.confirm_password {
                Ok(())
            } else {
                Err(FieldError::format("Passwords do not match"))
            }
        });
    errors.check("confirm_password", confirmation);

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationErrorKind;

    #[test]
    fn test_composition_rule() {
        let err = validate_new_password("password1").unwrap_err();
        assert_eq!(err.message, "Password must contain uppercase, lowercase, and number");
        assert!(validate_new_password("Password1").is_ok());
        assert!(validate_new_password("PASSWORD1").is_err());
        assert!(validate_new_password("Password").is_err());
    }

    #[test]
    fn test_length_checked_before_composition() {
        let err = validate_new_password("Pass1").unwrap_err();
        assert_eq!(err.message, "Password must be at least 8 characters");
    }

    #[test]
    fn test_password_change_form() {
        let errors = validate_password_change(&PasswordChangeForm::new("old", "Password1", "Password1"));
        assert!(errors.is_empty());

        let errors = validate_password_change(&PasswordChangeForm::new("old", "Password1", "Password2"));
        assert_eq!(errors.message("confirm_password"), Some("Passwords do not match"));

        let errors = validate_password_change(&PasswordChangeForm::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.kind("current_password"), Some(ValidationErrorKind::RequiredFieldMissing));
        assert_eq!(errors.message("new_password"), Some("New password is required"));
        assert_eq!(errors.message("confirm_password"), Some("Please confirm your password"));
    }

    #[test]
    fn test_mismatch_reported_even_when_new_password_is_weak() {
        let errors = validate_password_change(&PasswordChangeForm::new("old", "password1", "password2"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("new_password"));
        assert!(errors.contains("confirm_password"));
    }

    #[test]
    fn test_profile_form() {
        let errors = validate_profile(&ProfileForm {
            name: "  ".to_string(),
            email: "sarah.j@hospital".to_string(),
        });
        assert_eq!(errors.message("name"), Some("Name is required"));
        assert_eq!(errors.message("email"), Some("Please enter a valid email address"));

        assert!(validate_profile(&ProfileForm {
            name: "Dr. Sarah Johnson".to_string(),
            email: "sarah.j@hospital.com".to_string(),
        })
        .is_empty());
    }
}
