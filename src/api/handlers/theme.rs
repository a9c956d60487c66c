//! Shared light/dark theme flag

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::theme::Theme;

pub fn create_theme_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_theme).put(set_theme))
        .route("/toggle", post(toggle_theme))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// GET /theme
pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.theme.current(),
    })
}

/// PUT /theme
pub async fn set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Json<ThemeBody> {
    state.theme.set(body.theme);
    info!(theme = %body.theme, "Theme set");
    Json(body)
}

/// POST /theme/toggle
pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    let theme = state.theme.toggle();
    info!(theme = %theme, "Theme toggled");
    Json(ThemeBody { theme })
}
