//! Multipart upload reading
//!
//! Only file metadata is kept. The body is streamed and counted, never buffered whole.

use std::collections::HashMap;

use axum::extract::Multipart;
use tracing::debug;

use super::ApiError;
use crate::domain::upload::UploadedFile;

/// Name of the multipart part carrying the file
pub const FILE_FIELD: &str = "file";

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A multipart form: the uploaded file, if any, plus the plain text parts
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Text part by name, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

pub async fn read_upload(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let mime_type = field.content_type().unwrap_or(DEFAULT_MIME_TYPE).to_string();

            let mut size: u64 = 0;
            while let Some(chunk) = field.chunk().await.map_err(|e| {
                ApiError::bad_request(format!("Failed to read file '{}': {}", file_name, e))
            })? {
                size += chunk.len() as u64;
            }

            debug!(file_name = %file_name, size, mime_type = %mime_type, "Received upload");
            form.file = Some(UploadedFile::new(file_name, size, mime_type));
        } else {
            let value = field.text().await.map_err(|e| {
                ApiError::bad_request(format!("Failed to read field '{}': {}", name, e))
            })?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
