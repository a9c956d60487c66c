use std::fmt;

use serde::{Deserialize, Serialize};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

/// Metadata of a file received from the client. The bytes themselves are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// What an upload is for; each purpose has its own acceptance policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// Dermoscopic image for classification
    DiagnosticImage,
    /// Archive of labelled images for retraining
    Dataset,
    /// Trained model weights
    ModelFile,
}

impl UploadKind {
    /// Confirmation shown once an upload of this kind is accepted
    pub fn accepted_message(&self) -> &'static str {
        match self {
            Self::DiagnosticImage => "Image uploaded successfully!",
            Self::Dataset => "Dataset uploaded successfully!",
            Self::ModelFile => "Model file uploaded successfully!",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagnosticImage => write!(f, "diagnostic_image"),
            Self::Dataset => write!(f, "dataset"),
            Self::ModelFile => write!(f, "model_file"),
        }
    }
}
