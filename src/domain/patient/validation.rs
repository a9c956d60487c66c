//! Patient intake validation

use once_cell::sync::Lazy;
use regex::Regex;

use super::entity::{LesionSite, PatientForm, PatientFormData, Sex};
use crate::domain::validation::{require_trimmed, FieldError, ValidationErrors};

/// Two letters, four digits, three digits: `PT-2024-001`.
/// ASCII letters in either case, ASCII digits only.
static PATIENT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}-[0-9]{4}-[0-9]{3}$").expect("valid patient id regex"));

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 120;

/// Validate a patient ID; the value is trimmed before matching
pub fn validate_patient_id(patient_id: &str) -> Result<(), FieldError> {
    require_trimmed(patient_id, "Patient ID is required")?;

    if !PATIENT_ID_PATTERN.is_match(patient_id.trim()) {
        return Err(FieldError::format("Invalid format. Use PT-2024-001"));
    }

    Ok(())
}

/// Parse and range-check an age in whole years, inclusive of both bounds
pub fn validate_age(age: &str) -> Result<u8, FieldError> {
    require_trimmed(age, "Age is required")?;

    let years: i64 = age
        .trim()
        .parse()
        .map_err(|_| FieldError::format("Age must be a whole number"))?;

    if !(MIN_AGE..=MAX_AGE).contains(&years) {
        return Err(FieldError::range("Age must be between 0-120"));
    }

    Ok(years as u8)
}

pub fn validate_sex(sex: &str) -> Result<Sex, FieldError> {
    if sex.is_empty() {
        return Err(FieldError::required("Sex is required"));
    }
    sex.parse()
        .map_err(|_| FieldError::format("Sex must be one of: male, female, other"))
}

pub fn validate_lesion_site(site: &str) -> Result<LesionSite, FieldError> {
    if site.is_empty() {
        return Err(FieldError::required("Lesion site is required"));
    }
    site.parse().map_err(|_| {
        let allowed: Vec<&str> = LesionSite::ALL.iter().map(|s| s.as_str()).collect();
        FieldError::format(format!("Lesion site must be one of: {}", allowed.join(", ")))
    })
}

/// Validate the full intake form. All fields are checked; nothing is
/// returned unless every field passes.
pub fn validate_patient_form(form: &PatientForm) -> Result<PatientFormData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check("patient_id", validate_patient_id(&form.patient_id));

    let age = errors.capture("age", validate_age(&form.age));
    let sex = errors.capture("sex", validate_sex(&form.sex));
    let lesion_site = errors.capture("lesion_site", validate_lesion_site(&form.lesion_site));

    match (age, sex, lesion_site) {
        (Some(age), Some(sex), Some(lesion_site)) if errors.is_empty() => Ok(PatientFormData {
            patient_id: form.patient_id.trim().to_string(),
            age,
            sex,
            lesion_site,
        }),
        _ => Err(errors),
    }
}
