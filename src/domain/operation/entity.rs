//! Simulated operation entities

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::OperationError;
use crate::domain::validation::ValidationErrors;

/// Regex pattern for valid operation IDs: op-{uuid}
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^op-[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("valid operation id regex")
});

/// Identifier attached to each run, for log correlation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationId(String);

impl OperationId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !ID_PATTERN.is_match(&id) {
            return Err(format!(
                "Invalid operation ID '{}': must be in format op-{{uuid}}",
                id
            ));
        }
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(format!("op-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OperationId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperationId> for String {
    fn from(id: OperationId) -> Self {
        id.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static SCREEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid screen id regex"));

/// One client screen instance. Pending runs are tracked per screen,
/// so two screens never block each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !SCREEN_PATTERN.is_match(&id) {
            return Err(format!(
                "Invalid screen ID '{}': use 1-64 letters, digits, '-' or '_'",
                id
            ));
        }
        Ok(Self(id))
    }

    /// A fresh screen that shares nothing with any other
    pub fn generate() -> Self {
        Self(format!("screen-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScreenId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScreenId> for String {
    fn from(id: ScreenId) -> Self {
        id.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of a simulated operation
///
/// ```text
/// Idle -> Validating -> Invalid -> Idle
///                    -> Pending -> Success -> Idle
///                               -> Invalid            (login only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OperationState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Pending,
    Success,
}

impl OperationState {
    /// States after which the run has produced its outcome
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Invalid | Self::Success)
    }

    pub fn can_transition_to(&self, target: OperationState) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Invalid)
                | (Self::Validating, Self::Pending)
                | (Self::Pending, Self::Success)
                | (Self::Pending, Self::Invalid)
                | (Self::Invalid, Self::Idle)
                | (Self::Success, Self::Idle)
        )
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Invalid => write!(f, "invalid"),
            Self::Pending => write!(f, "pending"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// How long an operation pretends to work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayClass {
    None,
    Short,
    Long,
}

/// The user actions that run as simulated operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Login,
    SavePatient,
    ProcessImage,
    UpdateProfile,
    ChangePassword,
    StartTraining,
    ExportReport,
}

impl OperationKind {
    pub fn delay_class(&self) -> DelayClass {
        match self {
            Self::SavePatient => DelayClass::None,
            Self::Login | Self::UpdateProfile | Self::ChangePassword => DelayClass::Short,
            Self::ProcessImage | Self::StartTraining | Self::ExportReport => DelayClass::Long,
        }
    }

    /// Whether the pending phase itself may reject the input
    pub fn can_fail_while_pending(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn pending_message(&self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::SavePatient => "Saving patient record...",
            Self::ProcessImage => "Processing image with AI model...",
            Self::UpdateProfile => "Saving profile...",
            Self::ChangePassword => "Changing password...",
            Self::StartTraining => "Initializing model training...",
            Self::ExportReport => "Generating report...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Login => "Welcome back!",
            Self::SavePatient => "Patient record saved successfully!",
            Self::ProcessImage => "Classification complete! Viewing results...",
            Self::UpdateProfile => "Profile updated successfully!",
            Self::ChangePassword => "Password changed successfully!",
            Self::StartTraining => "Model training started successfully!",
            Self::ExportReport => "Report successfully exported!",
        }
    }

    /// Summary shown once when form validation fails
    pub fn invalid_summary(&self) -> &'static str {
        match self {
            Self::Login => "Please fix the errors before submitting",
            Self::SavePatient => "Please fill in all required fields correctly",
            Self::ProcessImage => "Please complete patient information before processing",
            Self::UpdateProfile => "Please fix the errors before saving",
            Self::ChangePassword => "Please fix the errors before changing password",
            Self::StartTraining => "Please fix the errors before starting training",
            Self::ExportReport => "Please select at least one section to export",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::SavePatient => write!(f, "save_patient"),
            Self::ProcessImage => write!(f, "process_image"),
            Self::UpdateProfile => write!(f, "update_profile"),
            Self::ChangePassword => write!(f, "change_password"),
            Self::StartTraining => write!(f, "start_training"),
            Self::ExportReport => write!(f, "export_report"),
        }
    }
}

/// One run of a simulated operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedOperation {
    id: OperationId,
    kind: OperationKind,
    state: OperationState,

    /// Field errors of the last rejection
    #[serde(skip_serializing_if = "ValidationErrors::is_empty", default)]
    errors: ValidationErrors,

    /// Latest user-facing notification (progress, confirmation or summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<String>,

    created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pending_since: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_at: Option<DateTime<Utc>>,
}

impl SimulatedOperation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            id: OperationId::generate(),
            kind,
            state: OperationState::Idle,
            errors: ValidationErrors::new(),
            notification: None,
            created_at: Utc::now(),
            pending_since: None,
            resolved_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &OperationId {
        &self.id
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn pending_since(&self) -> Option<DateTime<Utc>> {
        self.pending_since
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// The trigger stays disabled while pending
    pub fn is_busy(&self) -> bool {
        matches!(self.state, OperationState::Validating | OperationState::Pending)
    }

    fn transition(&mut self, target: OperationState) -> Result<(), OperationError> {
        if !self.state.can_transition_to(target) {
            return Err(OperationError::invalid_transition(
                &self.state.to_string(),
                &target.to_string(),
                format!("not allowed for '{}'", self.kind),
            ));
        }
        self.state = target;
        Ok(())
    }

    /// Submit: errors from a previous attempt are recomputed from scratch
    pub fn begin_validation(&mut self) -> Result<(), OperationError> {
        self.transition(OperationState::Validating)?;
        self.errors = ValidationErrors::new();
        self.notification = None;
        Ok(())
    }

    /// Apply the validation outcome: empty errors enter `Pending`, anything else `Invalid`
    pub fn finish_validation(&mut self, errors: ValidationErrors) -> Result<(), OperationError> {
        if errors.is_empty() {
            self.transition(OperationState::Pending)?;
            self.pending_since = Some(Utc::now());
            self.notification = Some(self.kind.pending_message().to_string());
        } else {
            self.reject(errors, self.kind.invalid_summary())?;
        }
        Ok(())
    }

    /// Override the progress message shown while pending
    pub fn set_pending_message(&mut self, message: impl Into<String>) {
        if self.state == OperationState::Pending {
            self.notification = Some(message.into());
        }
    }

    pub fn succeed(&mut self, message: impl Into<String>) -> Result<(), OperationError> {
        self.transition(OperationState::Success)?;
        self.notification = Some(message.into());
        self.resolved_at = Some(Utc::now());
        Ok(())
    }

    /// Resolve as invalid, from validation or (for login) from the pending phase
    pub fn reject(
        &mut self,
        errors: ValidationErrors,
        summary: impl Into<String>,
    ) -> Result<(), OperationError> {
        if self.state == OperationState::Pending && !self.kind.can_fail_while_pending() {
            return Err(OperationError::invalid_transition(
                "pending",
                "invalid",
                format!("'{}' has no failure branch once pending", self.kind),
            ));
        }
        self.transition(OperationState::Invalid)?;
        self.errors = errors;
        self.notification = Some(summary.into());
        self.resolved_at = Some(Utc::now());
        Ok(())
    }

    /// Back to idle after the outcome was shown; errors stay until the next submit
    pub fn reset(&mut self) -> Result<(), OperationError> {
        self.transition(OperationState::Idle)?;
        self.pending_since = None;
        Ok(())
    }

    /// Clear one field's error, as editing that input does
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.clear_field(field);
    }
}
