//! Infrastructure services

mod admin_service;
mod auth_service;
mod diagnosis_service;
mod profile_service;
mod record_service;
mod report_service;

pub use admin_service::{AdminService, UploadReceipt};
pub use auth_service::AuthService;
pub use diagnosis_service::DiagnosisService;
pub use profile_service::ProfileService;
pub use record_service::{RecordSearch, RecordService};
pub use report_service::{ReportPreview, ReportService};

use crate::domain::validation::ValidationErrors;

/// Split a validator result into the parsed value and the error map the runner expects
fn split_validated<T>(result: Result<T, ValidationErrors>) -> (Option<T>, ValidationErrors) {
    match result {
        Ok(value) => (Some(value), ValidationErrors::new()),
        Err(errors) => (None, errors),
    }
}
