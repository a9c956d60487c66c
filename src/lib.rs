//! Lesion Assist
//!
//! Simulated backend for a skin-lesion diagnostic assistant:
//! - Form validation for intake, login, profile, training and user management
//! - Simulated operations with a validating/pending/resolved lifecycle
//! - Filterable patient records and fixed dashboard figures
//! - Placeholder `/predict` and `/gradcam` inference endpoints

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::theme::ThemeHandle;
use infrastructure::{
    operation::OperationRunner,
    patient::InMemoryPatientRecordRepository,
    services::{
        AdminService, AuthService, DiagnosisService, ProfileService, RecordService, ReportService,
    },
    user::InMemoryManagedUserRepository,
};
use tracing::info;

/// Create the application state with every service wired to seeded in-memory data.
///
/// All services share one [`OperationRunner`]. A kind that is already pending is
/// refused only for the screen that started it; other screens run freely.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let runner = OperationRunner::new(config.simulation.clone());

    let records = Arc::new(InMemoryPatientRecordRepository::seeded());
    let users = Arc::new(InMemoryManagedUserRepository::seeded());

    info!(
        short_delay_ms = config.simulation.short_delay_ms,
        long_delay_ms = config.simulation.long_delay_ms,
        "Application state initialized"
    );

    AppState {
        auth_service: Arc::new(AuthService::new(runner.clone())),
        diagnosis_service: Arc::new(DiagnosisService::new(runner.clone())),
        record_service: Arc::new(RecordService::new(records)),
        profile_service: Arc::new(ProfileService::new(runner.clone())),
        report_service: Arc::new(ReportService::new(runner.clone())),
        admin_service: Arc::new(AdminService::new(runner, users)),
        theme: ThemeHandle::default(),
        config: Arc::new(config.clone()),
    }
}
