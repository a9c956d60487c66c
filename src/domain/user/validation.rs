use super::NewUserForm;
use crate::domain::validation::{require_trimmed, validate_email, ValidationErrors};

pub fn validate_new_user(form: &NewUserForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check("name", require_trimmed(&form.name, "Name is required"));
    errors.check("email", validate_email(&form.email));
    errors
}
