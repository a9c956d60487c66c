//! Auth service - simulated sign-in against the demo accounts

use tracing::{debug, instrument};

use crate::domain::auth::{authenticate, validate_login_form, Credentials, Session};
use crate::domain::operation::{OperationKind, ScreenId};
use crate::domain::DomainError;
use crate::infrastructure::operation::{Completed, OperationRunner, Submission};

/// Summary shown when the pair matches no demo account
pub const CREDENTIALS_HINT: &str = "Invalid credentials. Try doctor@medical.com / demo123";

#[derive(Debug, Clone)]
pub struct AuthService {
    runner: OperationRunner,
}

impl AuthService {
    pub fn new(runner: OperationRunner) -> Self {
        Self { runner }
    }

    /// Sign in. The resolved role is the matched account's, whatever the
    /// login-type toggle on the request says.
    #[instrument(skip(self, screen, credentials), fields(screen = %screen, email = %credentials.email))]
    pub async fn login(
        &self,
        screen: ScreenId,
        credentials: Credentials,
    ) -> Result<Completed<Session>, DomainError> {
        let errors = validate_login_form(&credentials);
        let submission = Submission::new(OperationKind::Login, errors).on_screen(screen);

        self.runner
            .run(submission, || async move {
                let session = authenticate(&credentials)
                    .map_err(|errors| DomainError::validation(CREDENTIALS_HINT, errors))?;

                if session.role != credentials.role {
                    debug!(
                        requested = %credentials.role,
                        resolved = %session.role,
                        "Login type toggle differs from account role"
                    );
                }

                let message = format!("Welcome back! Logged in as {}", session.role);
                Ok((session, message))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::domain::auth::Role;
    use crate::domain::validation::ValidationErrorKind;

    fn service() -> AuthService {
        AuthService::new(OperationRunner::new(SimulationConfig::instant()))
    }

    #[tokio::test]
    async fn test_doctor_login() {
        let completed = service()
            .login(ScreenId::generate(), Credentials::new("doctor@medical.com", "demo123", Role::Doctor))
            .await
            .unwrap();

        assert_eq!(completed.value.role, Role::Doctor);
        assert_eq!(completed.notification(), "Welcome back! Logged in as doctor");
    }

    #[tokio::test]
    async fn test_admin_pair_with_doctor_toggle_resolves_admin() {
        let completed = service()
            .login(ScreenId::generate(), Credentials::new("admin@medical.com", "admin123", Role::Doctor))
            .await
            .unwrap();

        assert_eq!(completed.value.role, Role::Admin);
        assert_eq!(completed.notification(), "Welcome back! Logged in as admin");
    }

    #[tokio::test]
    async fn test_unknown_pair_marks_both_fields() {
        let err = service()
            .login(ScreenId::generate(), Credentials::new("doctor@medical.com", "wrong-pass", Role::Doctor))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation { summary, errors } => {
                assert_eq!(summary, CREDENTIALS_HINT);
                assert_eq!(errors.kind("email"), Some(ValidationErrorKind::CredentialsInvalid));
                assert_eq!(errors.kind("password"), Some(ValidationErrorKind::CredentialsInvalid));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_form_errors_never_reach_credential_check() {
        let err = service()
            .login(ScreenId::generate(), Credentials::new("not-an-email", "123", Role::Doctor))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation { summary, errors } => {
                assert_eq!(summary, "Please fix the errors before submitting");
                assert_eq!(errors.message("email"), Some("Please enter a valid email address"));
                assert_eq!(
                    errors.message("password"),
                    Some("Password must be at least 6 characters")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
