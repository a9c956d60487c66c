//! Backend inference endpoints: `/predict` and `/gradcam`

use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, State},
    routing::post,
    Router,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{read_upload, ApiError, Json};
use crate::domain::classification::GradCamResult;

pub fn create_inference_router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/gradcam", post(grad_cam))
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_class: String,
    pub probabilities: BTreeMap<String, f64>,
}

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PredictResponse>, ApiError> {
    let upload = read_upload(multipart).await?;

    let result = state
        .diagnosis_service
        .predict(upload.file.as_ref())
        .inspect_err(|e| warn!(reason = %e, "Prediction request rejected"))?;

    debug!(predicted_class = %result.predicted_class, "Prediction served");

    Ok(Json(PredictResponse {
        probabilities: result.probability_map(),
        predicted_class: result.predicted_class,
    }))
}

/// POST /gradcam
pub async fn grad_cam(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GradCamResult>, ApiError> {
    let upload = read_upload(multipart).await?;

    let result = state
        .diagnosis_service
        .grad_cam(upload.file.as_ref())
        .inspect_err(|e| warn!(reason = %e, "Grad-CAM request rejected"))?;

    Ok(Json(result))
}
