//! Field-level validation error collection

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Field was empty or absent
    RequiredFieldMissing,
    /// Field did not match its expected pattern or vocabulary
    FormatInvalid,
    /// Numeric field fell outside its bounds
    RangeInvalid,
    /// Uploaded file type is not on the allow-list
    FileTypeRejected,
    /// Uploaded file is smaller or larger than permitted
    FileSizeRejected,
    /// Login pair did not match a known account
    CredentialsInvalid,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "required_field_missing"),
            Self::FormatInvalid => write!(f, "format_invalid"),
            Self::RangeInvalid => write!(f, "range_invalid"),
            Self::FileTypeRejected => write!(f, "file_type_rejected"),
            Self::FileSizeRejected => write!(f, "file_size_rejected"),
            Self::CredentialsInvalid => write!(f, "credentials_invalid"),
        }
    }
}

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Mapping of field name to failure; empty means the form is valid.
///
/// Field names are the snake_case request keys (`patient_id`, `lesion_site`, ...)
/// so the map can be rendered next to the offending inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. The first failure recorded for a field wins.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) {
        self.fields.entry(field.into()).or_insert(FieldError {
            kind,
            message: message.into(),
        });
    }

    /// Fold the outcome of a single-field check into the map
    pub fn check(&mut self, field: &str, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.fields.entry(field.to_string()).or_insert(error);
        }
    }

    /// Like [`check`](Self::check) but hands back the parsed value on success
    pub fn capture<T>(&mut self, field: &str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.fields.entry(field.to_string()).or_insert(error);
                None
            }
        }
    }

    /// Drop the error for a field, as happens when the user edits it
    pub fn clear_field(&mut self, field: &str) -> Option<FieldError> {
        self.fields.remove(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, error) in other.fields {
            self.fields.entry(field).or_insert(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    pub fn kind(&self, field: &str) -> Option<ValidationErrorKind> {
        self.fields.get(field).map(|e| e.kind)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|e| e.message.as_str())
    }

    /// Whether any field failed with the given kind
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.fields.values().any(|e| e.kind == kind)
    }

    /// Field name to message, the shape rendered inline by clients
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(field, error)| (field.clone(), error.message.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::RequiredFieldMissing, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::FormatInvalid, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::RangeInvalid, message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_for_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationErrorKind::RequiredFieldMissing, "Email is required");
        errors.add("email", ValidationErrorKind::FormatInvalid, "Please enter a valid email address");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.kind("email"), Some(ValidationErrorKind::RequiredFieldMissing));
    }

    #[test]
    fn test_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.add("age", ValidationErrorKind::RangeInvalid, "Age must be between 0-120");
        errors.add("sex", ValidationErrorKind::RequiredFieldMissing, "Sex is required");

        let cleared = errors.clear_field("age");
        assert!(cleared.is_some());
        assert!(!errors.contains("age"));
        assert!(errors.contains("sex"));
        assert!(errors.clear_field("age").is_none());
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.check("name", Err(FieldError::required("Name is required")));
        errors.check("email", Ok(()));

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.message("name"), Some("Name is required"));
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("epochs", ValidationErrorKind::RangeInvalid, "Epochs must be between 1 and 1000");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["epochs"]["kind"], "range_invalid");
        assert_eq!(json["epochs"]["message"], "Epochs must be between 1 and 1000");
    }

    #[test]
    fn test_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("password", ValidationErrorKind::CredentialsInvalid, "Invalid email or password");

        let messages = errors.messages();
        assert_eq!(messages.get("password").map(String::as_str), Some("Invalid email or password"));
        assert!(errors.has_kind(ValidationErrorKind::CredentialsInvalid));
        assert!(!errors.has_kind(ValidationErrorKind::FileTypeRejected));
    }
}
