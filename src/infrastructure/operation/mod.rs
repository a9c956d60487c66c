//! Simulated operation execution

mod runner;

pub use runner::{Completed, OperationRunner, Submission};
