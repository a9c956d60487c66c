//! Patient intake and image processing

use axum::{
    extract::{Multipart, State},
    routing::post,
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{read_upload, ApiError, Json, Notice, Screen, UploadForm};
use crate::domain::classification::ClassificationResult;
use crate::domain::patient::{PatientForm, PatientFormData};
use crate::domain::upload::UploadedFile;

pub fn create_diagnosis_router() -> Router<AppState> {
    Router::new()
        .route("/patient", post(save_patient))
        .route("/image", post(check_image))
        .route("/process", post(process))
}

/// POST /diagnosis/patient
pub async fn save_patient(
    State(state): State<AppState>,
    Screen(screen): Screen,
    Json(form): Json<PatientForm>,
) -> Result<Json<Notice<PatientFormData>>, ApiError> {
    debug!(patient_id = %form.patient_id, "Saving patient record");

    let completed = state.diagnosis_service.save_patient(screen, &form).await?;
    Ok(Json(completed.into()))
}

/// POST /diagnosis/image
///
/// Multipart part `file`. Applies the intake screen's type and size rules.
pub async fn check_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Notice<UploadedFile>>, ApiError> {
    let upload = read_upload(multipart).await?;
    let file = upload
        .file
        .ok_or_else(|| ApiError::bad_request("No image file provided").with_param("file"))?;

    let message = state.diagnosis_service.check_image(&file)?;
    Ok(Json(Notice::immediate(message, file)))
}

/// POST /diagnosis/process
///
/// Multipart part `file` plus text parts `patient_id`, `age`, `sex` and `lesion_site`.
pub async fn process(
    State(state): State<AppState>,
    Screen(screen): Screen,
    multipart: Multipart,
) -> Result<Json<Notice<ClassificationResult>>, ApiError> {
    let upload = read_upload(multipart).await?;
    let form = patient_form(&upload);

    let completed = state
        .diagnosis_service
        .process(screen, &form, upload.file.as_ref())
        .await?;

    Ok(Json(completed.into()))
}

fn patient_form(upload: &UploadForm) -> PatientForm {
    PatientForm {
        patient_id: upload.text("patient_id"),
        age: upload.text("age"),
        sex: upload.text("sex"),
        lesion_site: upload.text("lesion_site"),
    }
}
