//! Profile and security settings

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Notice, Screen};
use crate::domain::profile::{PasswordChangeForm, ProfileForm};

pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .route("/password", post(change_password))
}

/// GET /profile
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileForm> {
    Json(state.profile_service.current().await)
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Notice<ProfileForm>>, ApiError> {
    let completed = state.profile_service.update(screen, form).await?;
    Ok(Json(completed.into()))
}

/// POST /profile/password
pub async fn change_password(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(form): Json<PasswordChangeForm>,
) -> Result<Json<Notice<()>>, ApiError> {
    let completed = state.profile_service.change_password(screen, form).await?;
    Ok(Json(completed.into()))
}
