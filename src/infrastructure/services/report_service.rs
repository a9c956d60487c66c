//! Report service - preview and simulated export

use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::operation::{OperationKind, ScreenId};
use crate::domain::report::{validate_report_request, ExportFormat, ExportedReport, ReportRequest};
use crate::domain::DomainError;
use crate::infrastructure::operation::{Completed, OperationRunner, Submission};

/// What an export with the same request would contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPreview {
    pub format: ExportFormat,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    runner: OperationRunner,
}

impl ReportService {
    pub fn new(runner: OperationRunner) -> Self {
        Self { runner }
    }

    /// Immediate; previews do not run as an operation
    pub fn preview(&self, request: &ReportRequest) -> Result<ReportPreview, DomainError> {
        let errors = validate_report_request(request, "preview");
        if let Some(message) = errors.message("sections") {
            return Err(DomainError::validation(message.to_string(), errors));
        }

        Ok(ReportPreview {
            format: request.format,
            sections: request
                .sections
                .included()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    #[instrument(skip(self, screen, request), fields(screen = %screen, format = %request.format))]
    pub async fn export(
        &self,
        screen: ScreenId,
        request: ReportRequest,
    ) -> Result<Completed<ExportedReport>, DomainError> {
        let errors = validate_report_request(&request, "export");
        let submission = Submission::new(OperationKind::ExportReport, errors)
            .on_screen(screen)
            .with_pending_message(format!("Generating {} report...", request.format));

        self.runner
            .run(submission, || async move {
                let report = ExportedReport::new(&request);
                info!(file_name = %report.file_name, sections = report.sections.len(), "Report exported");
                let message = format!("Report successfully exported as {}!", request.format);
                Ok((report, message))
            })
            .await
    }
}
