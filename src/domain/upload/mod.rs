//! File upload acceptance

mod entity;
mod validation;

pub use entity::{UploadKind, UploadedFile, KIB, MIB};
pub use validation::{
    check_image_submission, validate_dataset, validate_diagnostic_image, validate_model_file,
    validate_upload, ImageSubmissionError, DATASET_SUFFIXES, IMAGE_MIME_TYPES, MAX_ARCHIVE_SIZE,
    MAX_IMAGE_SIZE, MIN_IMAGE_SIZE, MODEL_SUFFIXES,
};
