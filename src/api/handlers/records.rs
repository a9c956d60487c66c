//! Patient record lookup

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, Query};
use crate::domain::patient::{PatientRecord, RecordFilter, StatusFilter};

pub fn create_records_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records))
        .route("/{id}", get(get_record))
}

/// Query string of the lookup screen; both parameters are optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecordsQuery {
    pub query: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<PatientRecord>,
    /// Records matching the filter
    pub total: usize,
    /// Size of the unfiltered collection
    pub total_records: usize,
    /// Whether a search term or status narrowed the list
    pub filtered: bool,
}

/// GET /records?query=&status=
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let status: StatusFilter = params
        .status
        .parse()
        .map_err(|e: String| ApiError::bad_request(e).with_param("status"))?;

    let filter = RecordFilter::new(params.query, status);
    let search = state.record_service.search(&filter).await?;

    Ok(Json(RecordsResponse {
        total: search.records.len(),
        total_records: search.total_records,
        filtered: filter.is_active(),
        records: search.records,
    }))
}

/// GET /records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientRecord>, ApiError> {
    let record = state.record_service.get(&id).await?;
    Ok(Json(record))
}
