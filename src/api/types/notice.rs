//! Success envelope for screen actions

use serde::Serialize;

use crate::domain::operation::SimulatedOperation;
use crate::infrastructure::operation::Completed;

/// Confirmation shown to the user, with the action's payload
#[derive(Debug, Serialize)]
pub struct Notice<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<SimulatedOperation>,
    pub data: T,
}

impl<T> Notice<T> {
    /// For actions that do not run as a simulated operation
    pub fn immediate(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            operation: None,
            data,
        }
    }
}

impl<T> From<Completed<T>> for Notice<T> {
    fn from(completed: Completed<T>) -> Self {
        Self {
            message: completed.notification().to_string(),
            operation: Some(completed.operation),
            data: completed.value,
        }
    }
}
