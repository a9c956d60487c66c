use super::{TrainingConfig, TrainingForm};
use crate::domain::validation::{FieldError, ValidationErrors};

pub const MIN_EPOCHS: i64 = 1;
pub const MAX_EPOCHS: i64 = 1000;

/// Learning rate must parse as a float with 0 < lr <= 1
pub fn validate_learning_rate(value: &str) -> Result<f64, FieldError> {
    const MESSAGE: &str = "Learning rate must be between 0 and 1";

    let lr: f64 = value.trim().parse().map_err(|_| FieldError::format(MESSAGE))?;

    if lr.is_nan() || lr <= 0.0 || lr > 1.0 {
        return Err(FieldError::range(MESSAGE));
    }

    Ok(lr)
}

/// Epochs must parse as an integer in [1, 1000]
pub fn validate_epochs(value: &str) -> Result<u32, FieldError> {
    const MESSAGE: &str = "Epochs must be between 1 and 1000";

    let epochs: i64 = value.trim().parse().map_err(|_| FieldError::format(MESSAGE))?;

    if !(MIN_EPOCHS..=MAX_EPOCHS).contains(&epochs) {
        return Err(FieldError::range(MESSAGE));
    }

    Ok(epochs as u32)
}

/// Validate a training request. A dataset must have been uploaded first.
pub fn validate_training_form(
    form: &TrainingForm,
    dataset_uploaded: bool,
) -> Result<TrainingConfig, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !dataset_uploaded {
        errors.check(
            "dataset",
            Err(FieldError::required("Please upload a training dataset first")),
        );
    }

    let learning_rate = errors.capture("learning_rate", validate_learning_rate(&form.learning_rate));
    let epochs = errors.capture("epochs", validate_epochs(&form.epochs));

    match (learning_rate, epochs) {
        (Some(learning_rate), Some(epochs)) if errors.is_empty() => Ok(TrainingConfig {
            learning_rate,
            epochs,
            batch_size: form.batch_size,
            optimizer: form.optimizer,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::training::{BatchSize, Optimizer};
    use crate::domain::validation::ValidationErrorKind;

    fn form(lr: &str, epochs: &str) -> TrainingForm {
        TrainingForm {
            learning_rate: lr.to_string(),
            epochs: epochs.to_string(),
            ..TrainingForm::default()
        }
    }

    #[test]
    fn test_learning_rate_bounds() {
        assert_eq!(validate_learning_rate("1"), Ok(1.0));
        assert_eq!(validate_learning_rate("0.001"), Ok(0.001));

        for lr in ["0", "-0.1", "1.0001", "inf"] {
            let err = validate_learning_rate(lr).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::RangeInvalid, "{lr}");
        }
        for lr in ["", "fast", "NaN"] {
            assert!(validate_learning_rate(lr).is_err(), "{lr}");
        }
    }

    #[test]
    fn test_epoch_bounds() {
        assert_eq!(validate_epochs("1"), Ok(1));
        assert_eq!(validate_epochs("1000"), Ok(1000));
        assert_eq!(validate_epochs("0").unwrap_err().kind, ValidationErrorKind::RangeInvalid);
        assert_eq!(validate_epochs("1001").unwrap_err().kind, ValidationErrorKind::RangeInvalid);
        assert_eq!(validate_epochs("ten").unwrap_err().kind, ValidationErrorKind::FormatInvalid);
    }

    #[test]
    fn test_defaults_are_valid_once_dataset_present() {
        let config = validate_training_form(&TrainingForm::default(), true).unwrap();
        assert_eq!(config.learning_rate, 0.001);
        assert_eq!(config.epochs, 50);
        assert_eq!(config.batch_size, BatchSize::B32);
        assert_eq!(config.optimizer, Optimizer::Adam);
    }

    #[test]
    fn test_missing_dataset() {
        let errors = validate_training_form(&TrainingForm::default(), false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("dataset"), Some("Please upload a training dataset first"));
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = validate_training_form(&form("2", "0"), false).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message("learning_rate"), Some("Learning rate must be between 0 and 1"));
        assert_eq!(errors.message("epochs"), Some("Epochs must be between 1 and 1000"));
    }

    #[test]
    fn test_batch_size_serde() {
        let json = serde_json::to_string(&BatchSize::B64).unwrap();
        assert_eq!(json, "64");
        assert_eq!(serde_json::from_str::<BatchSize>("128").unwrap(), BatchSize::B128);
        assert!(serde_json::from_str::<BatchSize>("48").is_err());
    }
}
