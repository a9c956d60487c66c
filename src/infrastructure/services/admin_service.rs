//! Admin service - dashboard, user management, datasets, models and training

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use super::split_validated;
use crate::domain::dashboard::{DashboardSnapshot, ModelInfo};
use crate::domain::operation::{OperationKind, ScreenId};
use crate::domain::training::{validate_training_form, TrainingConfig, TrainingForm};
use crate::domain::upload::{validate_upload, UploadKind, UploadedFile};
use crate::domain::user::{validate_new_user, ManagedUser, ManagedUserRepository, NewUserForm};
use crate::domain::validation::ValidationErrors;
use crate::domain::DomainError;
use crate::infrastructure::operation::{Completed, OperationRunner, Submission};

pub const ADD_USER_SUMMARY: &str = "Please fix the errors before adding the user";

/// Acknowledgement of an accepted upload. The bytes were discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub kind: UploadKind,
    pub file: UploadedFile,
    pub message: String,
}

#[derive(Clone)]
pub struct AdminService {
    runner: OperationRunner,
    users: Arc<dyn ManagedUserRepository>,
    dataset: Arc<RwLock<Option<UploadedFile>>>,
    model_file: Arc<RwLock<Option<UploadedFile>>>,
}

impl AdminService {
    pub fn new(runner: OperationRunner, users: Arc<dyn ManagedUserRepository>) -> Self {
        Self {
            runner,
            users,
            dataset: Arc::new(RwLock::new(None)),
            model_file: Arc::new(RwLock::new(None)),
        }
    }

    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot::current()
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo::current()
    }

    pub async fn list_users(&self) -> Result<Vec<ManagedUser>, DomainError> {
        self.users.list().await
    }

    #[instrument(skip(self, form))]
    pub async fn add_user(&self, form: NewUserForm) -> Result<ManagedUser, DomainError> {
        let errors = validate_new_user(&form);
        if !errors.is_empty() {
            return Err(DomainError::validation(ADD_USER_SUMMARY, errors));
        }

        let user = self.users.create(form).await?;
        info!(user_id = user.id(), role = %user.role(), "User added");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn deactivate_user(&self, id: u32) -> Result<ManagedUser, DomainError> {
        let user = self.users.deactivate(id).await?;
        info!(user_id = id, "User deactivated");
        Ok(user)
    }

    /// Accept a training dataset or a model file. Replaces any earlier upload of the same kind.
    #[instrument(skip(self, file), fields(name = %file.name, size = file.size))]
    pub async fn upload(&self, kind: UploadKind, file: UploadedFile) -> Result<UploadReceipt, DomainError> {
        let slot = match kind {
            UploadKind::Dataset => &self.dataset,
            UploadKind::ModelFile => &self.model_file,
            UploadKind::DiagnosticImage => {
                return Err(DomainError::invalid_request(
                    "Diagnostic images are not accepted by the admin console",
                ));
            }
        };

        if let Err(error) = validate_upload(kind, &file) {
            warn!(kind = %kind, reason = %error, "Upload rejected");
            let summary = error.message.clone();
            let mut errors = ValidationErrors::new();
            errors.check("file", Err(error));
            return Err(DomainError::validation(summary, errors));
        }

        *slot.write().await = Some(file.clone());
        info!(kind = %kind, "Upload accepted");

        Ok(UploadReceipt {
            kind,
            message: kind.accepted_message().to_string(),
            file,
        })
    }

    pub async fn dataset(&self) -> Option<UploadedFile> {
        self.dataset.read().await.clone()
    }

    pub async fn model_file(&self) -> Option<UploadedFile> {
        self.model_file.read().await.clone()
    }

    #[instrument(skip(self, screen, form), fields(screen = %screen))]
    pub async fn start_training(
        &self,
        screen: ScreenId,
        form: &TrainingForm,
    ) -> Result<Completed<TrainingConfig>, DomainError> {
        let dataset_uploaded = self.dataset.read().await.is_some();
        let (config, errors) = split_validated(validate_training_form(form, dataset_uploaded));
        let submission = Submission::new(OperationKind::StartTraining, errors).on_screen(screen);

        self.runner
            .run(submission, || async move {
                let config = config.ok_or_else(|| DomainError::internal("Validated training config missing"))?;
                info!(
                    learning_rate = config.learning_rate,
                    epochs = config.epochs,
                    batch_size = config.batch_size.value(),
                    optimizer = %config.optimizer,
                    "Training started"
                );
                Ok((config, OperationKind::StartTraining.success_message().to_string()))
            })
            .await
    }
}
