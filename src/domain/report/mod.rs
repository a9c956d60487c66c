//! Diagnostic report export configuration

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldError, ValidationErrors};

/// Toggleable report sections. The clinical disclaimer is not listed: it is always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSections {
    pub patient_info: bool,
    pub diagnosis_results: bool,
    pub grad_cam: bool,
    pub recommendations: bool,
    pub technical_details: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            patient_info: true,
            diagnosis_results: true,
            grad_cam: true,
            recommendations: true,
            technical_details: false,
        }
    }
}

impl ReportSections {
    /// Section names in document order, selected ones only, disclaimer last
    pub fn included(&self) -> Vec<&'static str> {
        let mut sections: Vec<&'static str> = [
            (self.patient_info, "patient_info"),
            (self.diagnosis_results, "diagnosis_results"),
            (self.grad_cam, "grad_cam"),
            (self.recommendations, "recommendations"),
            (self.technical_details, "technical_details"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        sections.push("clinical_disclaimer");
        sections
    }

    /// Count of user-selected sections, disclaimer excluded
    pub fn selected_count(&self) -> usize {
        self.included().len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub sections: ReportSections,
    pub format: ExportFormat,
}

/// Receipt of a simulated export; no document is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReport {
    pub file_name: String,
    pub format: ExportFormat,
    pub sections: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ExportedReport {
    pub fn new(request: &ReportRequest) -> Self {
        Self {
            file_name: format!(
                "diagnostic-report-{}.{}",
                uuid::Uuid::new_v4(),
                request.format.extension()
            ),
            format: request.format,
            sections: request
                .sections
                .included()
                .into_iter()
                .map(str::to_string)
                .collect(),
            generated_at: Utc::now(),
        }
    }
}

/// At least one section besides the disclaimer must be selected.
/// `action` is the verb used in the message: "preview" or "export".
pub fn validate_report_request(request: &ReportRequest, action: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if request.sections.selected_count() == 0 {
        errors.check(
            "sections",
            Err(FieldError::required(format!(
                "Please select at least one section to {}",
                action
            ))),
        );
    }

    errors
}
