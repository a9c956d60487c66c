//! Admin console: dashboard, users, datasets, models and training

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{read_upload, ApiError, Json, Notice, Path, Screen};
use crate::domain::dashboard::{DashboardSnapshot, ModelInfo};
use crate::domain::training::{TrainingConfig, TrainingForm};
use crate::domain::upload::UploadKind;
use crate::domain::user::{ManagedUser, NewUserForm};
use crate::infrastructure::services::UploadReceipt;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/model", get(model_info))
        .route("/users", get(list_users).post(add_user))
        .route("/users/{id}", delete(deactivate_user))
        .route("/datasets", post(upload_dataset))
        .route("/models", post(upload_model))
        .route("/training", post(start_training))
}

/// GET /admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.admin_service.dashboard())
}

/// GET /admin/model
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.admin_service.model_info())
}

/// GET /admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<ManagedUser>>, ApiError> {
    Ok(Json(state.admin_service.list_users().await?))
}

/// POST /admin/users
pub async fn add_user(
    State(state): State<AppState>,
    Json(form): Json<NewUserForm>,
) -> Result<(StatusCode, Json<Notice<ManagedUser>>), ApiError> {
    let user = state.admin_service.add_user(form).await?;
    let message = format!("{} added successfully!", user.name());
    Ok((StatusCode::CREATED, Json(Notice::immediate(message, user))))
}

/// DELETE /admin/users/{id}
///
/// Deactivates the account; nothing is removed.
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Notice<ManagedUser>>, ApiError> {
    let user = state.admin_service.deactivate_user(id).await?;
    let message = format!("User {} has been deactivated", user.name());
    Ok(Json(Notice::immediate(message, user)))
}

/// POST /admin/datasets (multipart part `file`)
pub async fn upload_dataset(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadReceipt>, ApiError> {
    upload(state, multipart, UploadKind::Dataset).await
}

/// POST /admin/models (multipart part `file`)
pub async fn upload_model(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadReceipt>, ApiError> {
    upload(state, multipart, UploadKind::ModelFile).await
}

async fn upload(
    state: AppState,
    multipart: Multipart,
    kind: UploadKind,
) -> Result<Json<UploadReceipt>, ApiError> {
    debug!(kind = %kind, "Admin upload");

    let file = read_upload(multipart)
        .await?
        .file
        .ok_or_else(|| ApiError::bad_request("No file provided").with_param("file"))?;

    Ok(Json(state.admin_service.upload(kind, file).await?))
}

/// POST /admin/training
pub async fn start_training(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(form): Json<TrainingForm>,
) -> Result<Json<Notice<TrainingConfig>>, ApiError> {
    let completed = state.admin_service.start_training(screen, &form).await?;
    Ok(Json(completed.into()))
}
