//! Infrastructure layer - Storage, services and runtime plumbing

pub mod logging;
pub mod operation;
pub mod patient;
pub mod services;
pub mod user;
