use thiserror::Error;

use super::operation::OperationError;
use super::validation::ValidationErrors;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {summary}")]
    Validation {
        summary: String,
        errors: ValidationErrors,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(summary: impl Into<String>, errors: ValidationErrors) -> Self {
        Self::Validation {
            summary: summary.into(),
            errors,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<OperationError> for DomainError {
    fn from(error: OperationError) -> Self {
        match error {
            OperationError::AlreadyPending(_) => Self::conflict(error.to_string()),
            OperationError::InvalidStateTransition { .. } => Self::internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationErrorKind;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Patient record 'PT-2024-999' not found");
        assert_eq!(
            error.to_string(),
            "Not found: Patient record 'PT-2024-999' not found"
        );
    }

    #[test]
    fn test_validation_error_keeps_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("age", ValidationErrorKind::RangeInvalid, "Age must be between 0-120");

        let error = DomainError::validation("Please fill in all required fields correctly", errors);
        assert_eq!(
            error.to_string(),
            "Validation error: Please fill in all required fields correctly"
        );

        match error {
            DomainError::Validation { errors, .. } => {
                assert_eq!(errors.message("age"), Some("Age must be between 0-120"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Operation already pending");
        assert_eq!(error.to_string(), "Conflict: Operation already pending");
    }

    #[test]
    fn test_already_pending_maps_to_conflict() {
        let error: DomainError =
            OperationError::already_pending(crate::domain::OperationKind::ExportReport).into();
        assert!(matches!(error, DomainError::Conflict { .. }));
        assert_eq!(
            error.to_string(),
            "Conflict: Operation 'export_report' is already in progress"
        );
    }
}
