//! Report preview and export

use axum::{extract::State, routing::post, Router};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Notice, Screen};
use crate::domain::report::{ExportedReport, ReportRequest};
use crate::infrastructure::services::ReportPreview;

pub fn create_reports_router() -> Router<AppState> {
    Router::new()
        .route("/preview", post(preview))
        .route("/export", post(export))
}

/// POST /reports/preview
pub async fn preview(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportPreview>, ApiError> {
    Ok(Json(state.report_service.preview(&request)?))
}

/// POST /reports/export
pub async fn export(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(request): Json<ReportRequest>,
) -> Result<Json<Notice<ExportedReport>>, ApiError> {
    let completed = state.report_service.export(screen, request).await?;
    Ok(Json(completed.into()))
}
