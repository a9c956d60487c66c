//! Operation-specific errors

use thiserror::Error;

use super::OperationKind;

/// Errors raised by the simulated operation state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The requested transition is not part of the state machine
    #[error("Invalid state transition from '{from}' to '{to}': {reason}")]
    InvalidStateTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Another operation of the same kind is still pending
    #[error("Operation '{0}' is already in progress")]
    AlreadyPending(OperationKind),
}

impl OperationError {
    pub fn invalid_transition(from: &str, to: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }

    pub fn already_pending(kind: OperationKind) -> Self {
        Self::AlreadyPending(kind)
    }
}
