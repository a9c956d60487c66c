//! Profile service - profile edits and password changes

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::domain::operation::{OperationKind, ScreenId};
use crate::domain::profile::{validate_password_change, validate_profile, PasswordChangeForm, ProfileForm};
use crate::domain::DomainError;
use crate::infrastructure::operation::{Completed, OperationRunner, Submission};

/// Holds the signed-in clinician's profile in memory
#[derive(Debug, Clone)]
pub struct ProfileService {
    runner: OperationRunner,
    profile: Arc<RwLock<ProfileForm>>,
}

impl ProfileService {
    pub fn new(runner: OperationRunner) -> Self {
        Self::with_profile(
            runner,
            ProfileForm {
                name: "Dr. Sarah Johnson".to_string(),
                email: "sarah.j@hospital.com".to_string(),
            },
        )
    }

    pub fn with_profile(runner: OperationRunner, profile: ProfileForm) -> Self {
        Self {
            runner,
            profile: Arc::new(RwLock::new(profile)),
        }
    }

    pub async fn current(&self) -> ProfileForm {
        self.profile.read().await.clone()
    }

    #[instrument(skip(self, screen, form), fields(screen = %screen))]
    pub async fn update(
        &self,
        screen: ScreenId,
        form: ProfileForm,
    ) -> Result<Completed<ProfileForm>, DomainError> {
        let errors = validate_profile(&form);
        let submission = Submission::new(OperationKind::UpdateProfile, errors).on_screen(screen);

        self.runner
            .run(submission, || async move {
                let mut profile = self.profile.write().await;
                *profile = ProfileForm {
                    name: form.name.trim().to_string(),
                    email: form.email,
                };
                info!(email = %profile.email, "Profile updated");
                Ok((profile.clone(), OperationKind::UpdateProfile.success_message().to_string()))
            })
            .await
    }

    /// Password change is simulated; the current password is never checked
    #[instrument(skip(self, screen, form), fields(screen = %screen))]
    pub async fn change_password(
        &self,
        screen: ScreenId,
        form: PasswordChangeForm,
    ) -> Result<Completed<()>, DomainError> {
        let errors = validate_password_change(&form);
        let submission = Submission::new(OperationKind::ChangePassword, errors).on_screen(screen);

        self.runner
            .run(submission, || async {
                info!("Password changed");
                Ok(((), OperationKind::ChangePassword.success_message().to_string()))
            })
            .await
    }
}
