//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::theme::ThemeHandle;
use crate::infrastructure::services::{
    AdminService, AuthService, DiagnosisService, ProfileService, RecordService, ReportService,
};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub diagnosis_service: Arc<DiagnosisService>,
    pub record_service: Arc<RecordService>,
    pub profile_service: Arc<ProfileService>,
    pub report_service: Arc<ReportService>,
    pub admin_service: Arc<AdminService>,
    pub theme: ThemeHandle,
    pub config: Arc<AppConfig>,
}
