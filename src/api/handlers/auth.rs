//! Sign-in endpoint

use axum::{extract::State, routing::post, Router};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Notice, Screen};
use crate::domain::auth::{Credentials, Session};

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// POST /auth/login
///
/// Simulated sign-in against the two demo accounts. No token is issued.
pub async fn login(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Notice<Session>>, ApiError> {
    debug!(email = %credentials.email, role = %credentials.role, "Login attempt");

    let completed = state.auth_service.login(screen, credentials).await?;
    Ok(Json(completed.into()))
}
