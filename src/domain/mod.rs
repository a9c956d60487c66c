//! Domain layer - Core business logic and entities

pub mod auth;
pub mod classification;
pub mod dashboard;
pub mod error;
pub mod operation;
pub mod patient;
pub mod profile;
pub mod report;
pub mod theme;
pub mod training;
pub mod upload;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use operation::{OperationError, OperationKind, OperationState, ScreenId, SimulatedOperation};
pub use validation::{FieldError, ValidationErrorKind, ValidationErrors};
