//! Upload acceptance rules

use thiserror::Error;

use super::entity::{UploadKind, UploadedFile, KIB, MIB};
use crate::domain::validation::{FieldError, ValidationErrorKind};

/// Accepted MIME types for diagnostic images
pub const IMAGE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];
pub const MIN_IMAGE_SIZE: u64 = 10 * KIB;
pub const MAX_IMAGE_SIZE: u64 = 10 * MIB;

pub const DATASET_SUFFIXES: [&str; 2] = [".zip", ".tar.gz"];
pub const MODEL_SUFFIXES: [&str; 3] = [".h5", ".pt", ".pth"];
pub const MAX_ARCHIVE_SIZE: u64 = 500 * MIB;

fn type_rejected(message: &str) -> FieldError {
    FieldError::new(ValidationErrorKind::FileTypeRejected, message)
}

fn size_rejected(message: &str) -> FieldError {
    FieldError::new(ValidationErrorKind::FileSizeRejected, message)
}

/// Type first, then the ceiling, then the floor. Both size bounds are inclusive.
pub fn validate_diagnostic_image(file: &UploadedFile) -> Result<(), FieldError> {
    if !IMAGE_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(type_rejected(
            "Invalid file type. Please upload JPEG or PNG images only.",
        ));
    }

    if file.size > MAX_IMAGE_SIZE {
        return Err(size_rejected(
            "File size exceeds 10MB limit. Please upload a smaller image.",
        ));
    }

    if file.size < MIN_IMAGE_SIZE {
        return Err(size_rejected(
            "File is too small. Please upload a valid medical image.",
        ));
    }

    Ok(())
}

/// Suffix match on the file name is case-sensitive
pub fn validate_dataset(file: &UploadedFile) -> Result<(), FieldError> {
    if !DATASET_SUFFIXES.iter().any(|s| file.name.ends_with(s)) {
        return Err(type_rejected(
            "Invalid file type. Please upload .zip or .tar.gz files",
        ));
    }

    if file.size > MAX_ARCHIVE_SIZE {
        return Err(size_rejected("File size exceeds 500MB limit"));
    }

    Ok(())
}

pub fn validate_model_file(file: &UploadedFile) -> Result<(), FieldError> {
    if !MODEL_SUFFIXES.iter().any(|s| file.name.ends_with(s)) {
        return Err(type_rejected(
            "Invalid file type. Please upload .h5, .pt or .pth files",
        ));
    }

    if file.size > MAX_ARCHIVE_SIZE {
        return Err(size_rejected("File size exceeds 500MB limit"));
    }

    Ok(())
}

pub fn validate_upload(kind: UploadKind, file: &UploadedFile) -> Result<(), FieldError> {
    match kind {
        UploadKind::DiagnosticImage => validate_diagnostic_image(file),
        UploadKind::Dataset => validate_dataset(file),
        UploadKind::ModelFile => validate_model_file(file),
    }
}

/// Rejections of the inference endpoints, which answer with distinct status codes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageSubmissionError {
    #[error("No image file provided")]
    MissingFile,

    #[error("Empty filename")]
    EmptyFilename,

    #[error("Invalid file type. Only JPEG and PNG are accepted")]
    UnsupportedType,
}

/// Presence, name, and type checks of `/predict` and `/gradcam`. No size limits apply there.
pub fn check_image_submission(file: Option<&UploadedFile>) -> Result<(), ImageSubmissionError> {
    let file = file.ok_or(ImageSubmissionError::MissingFile)?;

    if file.name.is_empty() {
        return Err(ImageSubmissionError::EmptyFilename);
    }

    if !IMAGE_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ImageSubmissionError::UnsupportedType);
    }

    Ok(())
}
