//! API types shared by the handlers

pub mod error;
pub mod extract;
pub mod json;
pub mod multipart;
pub mod notice;

pub use error::{ApiError, ApiErrorResponse};
pub use extract::{Path, Query, Screen, SCREEN_HEADER};
pub use json::Json;
pub use multipart::{read_upload, UploadForm};
pub use notice::Notice;
