//! Retraining configuration

mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use validation::{
    validate_epochs, validate_learning_rate, validate_training_form, MAX_EPOCHS, MIN_EPOCHS,
};

/// Mini-batch sizes offered by the training form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BatchSize {
    B16,
    #[default]
    B32,
    B64,
    B128,
}

impl BatchSize {
    pub fn value(&self) -> u32 {
        match self {
            Self::B16 => 16,
            Self::B32 => 32,
            Self::B64 => 64,
            Self::B128 => 128,
        }
    }
}

impl TryFrom<u32> for BatchSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            16 => Ok(Self::B16),
            32 => Ok(Self::B32),
            64 => Ok(Self::B64),
            128 => Ok(Self::B128),
            other => Err(format!("Unsupported batch size {}; expected 16, 32, 64 or 128", other)),
        }
    }
}

impl From<BatchSize> for u32 {
    fn from(size: BatchSize) -> Self {
        size.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimizer {
    #[default]
    Adam,
    Sgd,
    Rmsprop,
}

impl fmt::Display for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adam => write!(f, "adam"),
            Self::Sgd => write!(f, "sgd"),
            Self::Rmsprop => write!(f, "rmsprop"),
        }
    }
}

/// Training form as typed; the numeric fields are free text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingForm {
    pub learning_rate: String,
    pub epochs: String,
    pub batch_size: BatchSize,
    pub optimizer: Optimizer,
}

impl Default for TrainingForm {
    fn default() -> Self {
        Self {
            learning_rate: "0.001".to_string(),
            epochs: "50".to_string(),
            batch_size: BatchSize::default(),
            optimizer: Optimizer::default(),
        }
    }
}

/// A training run configuration that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: u32,
    pub batch_size: BatchSize,
    pub optimizer: Optimizer,
}
