//! Diagnosis service - patient intake, image checks and the placeholder classifier

use tracing::{info, instrument, warn};

use super::split_validated;
use crate::domain::classification::{ClassificationResult, GradCamResult};
use crate::domain::operation::{OperationKind, ScreenId};
use crate::domain::patient::{validate_patient_form, PatientForm, PatientFormData};
use crate::domain::upload::{
    check_image_submission, validate_diagnostic_image, ImageSubmissionError, UploadKind,
    UploadedFile,
};
use crate::domain::validation::{FieldError, ValidationErrors};
use crate::domain::DomainError;
use crate::infrastructure::operation::{Completed, OperationRunner, Submission};

pub const IMAGE_MISSING_MESSAGE: &str = "Please upload a dermoscopic image first";

#[derive(Debug, Clone)]
pub struct DiagnosisService {
    runner: OperationRunner,
}

impl DiagnosisService {
    pub fn new(runner: OperationRunner) -> Self {
        Self { runner }
    }

    /// Validate and "save" the intake form. Nothing is persisted.
    #[instrument(skip(self, screen, form), fields(screen = %screen))]
    pub async fn save_patient(
        &self,
        screen: ScreenId,
        form: &PatientForm,
    ) -> Result<Completed<PatientFormData>, DomainError> {
        let (data, errors) = split_validated(validate_patient_form(form));
        let submission = Submission::new(OperationKind::SavePatient, errors).on_screen(screen);

        self.runner
            .run(submission, || async move {
                let data = data.ok_or_else(|| DomainError::internal("Validated patient data missing"))?;
                info!(patient_id = %data.patient_id, "Patient record saved");
                Ok((data, OperationKind::SavePatient.success_message().to_string()))
            })
            .await
    }

    /// Acceptance check run when an image is dropped on the intake screen
    #[instrument(skip(self, file), fields(name = %file.name, size = file.size))]
    pub fn check_image(&self, file: &UploadedFile) -> Result<&'static str, DomainError> {
        validate_diagnostic_image(file).map_err(|error| {
            warn!(reason = %error, "Diagnostic image rejected");
            let summary = error.message.clone();
            let mut errors = ValidationErrors::new();
            errors.check("image", Err(error));
            DomainError::validation(summary, errors)
        })?;

        Ok(UploadKind::DiagnosticImage.accepted_message())
    }

    /// Classify an image for a patient. The image is checked before the form.
    #[instrument(skip(self, screen, form, image), fields(screen = %screen))]
    pub async fn process(
        &self,
        screen: ScreenId,
        form: &PatientForm,
        image: Option<&UploadedFile>,
    ) -> Result<Completed<ClassificationResult>, DomainError> {
        let submission = match image.map(validate_diagnostic_image) {
            None => Self::image_rejection(FieldError::required(IMAGE_MISSING_MESSAGE)),
            Some(Err(error)) => Self::image_rejection(error),
            Some(Ok(())) => {
                let (_, errors) = split_validated(validate_patient_form(form));
                Submission::new(OperationKind::ProcessImage, errors)
            }
        };

        self.runner
            .run(submission.on_screen(screen), || async {
                let result = ClassificationResult::placeholder();
                info!(
                    predicted_class = %result.predicted_class,
                    confidence = result.confidence_percent(),
                    "Image classified"
                );
                Ok((result, OperationKind::ProcessImage.success_message().to_string()))
            })
            .await
    }

    fn image_rejection(error: FieldError) -> Submission {
        let summary = error.message.clone();
        let mut errors = ValidationErrors::new();
        errors.check("image", Err(error));
        Submission::new(OperationKind::ProcessImage, errors).with_summary(summary)
    }

    /// Backend inference endpoint; no model is loaded so the result is the placeholder
    pub fn predict(
        &self,
        file: Option<&UploadedFile>,
    ) -> Result<ClassificationResult, ImageSubmissionError> {
        check_image_submission(file)?;
        Ok(ClassificationResult::placeholder())
    }

    pub fn grad_cam(&self, file: Option<&UploadedFile>) -> Result<GradCamResult, ImageSubmissionError> {
        check_image_submission(file)?;
        Ok(GradCamResult::pending())
    }
}
