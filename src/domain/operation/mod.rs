//! Simulated operation domain
//!
//! Every user action that would call a backend runs through the same
//! state machine: validate, wait a fixed delay, resolve.

mod entity;
mod error;

pub use entity::{
    DelayClass, OperationId, OperationKind, OperationState, ScreenId,
    SimulatedOperation,
};
pub use error::OperationError;
