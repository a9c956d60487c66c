//! Runner driving simulated operations through their state machine

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::domain::error::DomainError;
use crate::domain::operation::{
    DelayClass, OperationError, OperationKind, ScreenId, SimulatedOperation,
};
use crate::domain::validation::ValidationErrors;

/// A user action ready to run: the kind plus the outcome of form validation
#[derive(Debug, Clone)]
pub struct Submission {
    kind: OperationKind,
    screen: ScreenId,
    errors: ValidationErrors,
    summary: Option<String>,
    pending_message: Option<String>,
}

impl Submission {
    /// A submission from a screen of its own, which no other run can block
    pub fn new(kind: OperationKind, errors: ValidationErrors) -> Self {
        Self {
            kind,
            screen: ScreenId::generate(),
            errors,
            summary: None,
            pending_message: None,
        }
    }

    /// Submit from a known screen; a pending run of the same kind there blocks this one
    pub fn on_screen(mut self, screen: ScreenId) -> Self {
        self.screen = screen;
        self
    }

    /// Replace the kind's default invalid summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Replace the kind's default progress message
    pub fn with_pending_message(mut self, message: impl Into<String>) -> Self {
        self.pending_message = Some(message.into());
        self
    }
}

/// Result of a run that reached `Success`
#[derive(Debug, Clone, Serialize)]
pub struct Completed<T> {
    /// Final snapshot of the operation
    pub operation: SimulatedOperation,
    pub value: T,
}

impl<T> Completed<T> {
    pub fn notification(&self) -> &str {
        self.operation.notification().unwrap_or_default()
    }
}

type PendingSlot = (ScreenId, OperationKind);

/// Runs operations: at most one pending run per kind on each screen
#[derive(Debug, Clone)]
pub struct OperationRunner {
    simulation: SimulationConfig,
    pending: Arc<Mutex<HashSet<PendingSlot>>>,
}

/// Releases the screen's pending slot on every exit path
struct PendingGuard {
    slot: PendingSlot,
    pending: Arc<Mutex<HashSet<PendingSlot>>>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.remove(&self.slot);
        }
    }
}

impl OperationRunner {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self {
            simulation,
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn delay_for(&self, kind: OperationKind) -> Duration {
        match kind.delay_class() {
            DelayClass::None => Duration::ZERO,
            DelayClass::Short => self.simulation.short_delay(),
            DelayClass::Long => self.simulation.long_delay(),
        }
    }

    /// Whether a run of this kind on `screen` is between validation and resolution
    pub fn is_busy(&self, screen: &ScreenId, kind: OperationKind) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.contains(&(screen.clone(), kind)))
            .unwrap_or(false)
    }

    fn acquire(&self, screen: ScreenId, kind: OperationKind) -> Result<PendingGuard, DomainError> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| DomainError::internal("Pending operation registry poisoned"))?;

        let slot = (screen, kind);
        if pending.contains(&slot) {
            return Err(OperationError::already_pending(kind).into());
        }
        pending.insert(slot.clone());

        Ok(PendingGuard {
            slot,
            pending: Arc::clone(&self.pending),
        })
    }

    /// Run a submission.
    ///
    /// Invalid input resolves to `DomainError::Validation` without waiting
    /// and without touching the screen's pending slot. Valid input takes the
    /// slot (or fails with `Conflict` if it is taken), waits the kind's delay and then runs `work`, whose value
    /// and confirmation message become the success outcome. `work` may only
    /// reject with `DomainError::Validation` for kinds that can fail while
    /// pending; any other error aborts the run unchanged.
    pub async fn run<T, F, Fut>(
        &self,
        submission: Submission,
        work: F,
    ) -> Result<Completed<T>, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(T, String), DomainError>>,
    {
        let Submission {
            kind,
            screen,
            errors,
            summary,
            pending_message,
        } = submission;

        let mut operation = SimulatedOperation::new(kind);

        operation.begin_validation()?;

        if !errors.is_empty() {
            let summary = summary.unwrap_or_else(|| kind.invalid_summary().to_string());
            warn!(
                operation_id = %operation.id(),
                screen = %screen,
                kind = %kind,
                fields = ?errors.messages().keys().collect::<Vec<_>>(),
                "Submission rejected by validation"
            );
            operation.reject(errors.clone(), summary.clone())?;
            operation.reset()?;
            return Err(DomainError::validation(summary, errors));
        }

        let _guard = self.acquire(screen.clone(), kind)?;
        operation.finish_validation(ValidationErrors::new())?;
        if let Some(message) = pending_message {
            operation.set_pending_message(message);
        }

        let delay = self.delay_for(kind);
        debug!(
            operation_id = %operation.id(),
            screen = %screen,
            kind = %kind,
            delay_ms = delay.as_millis() as u64,
            progress = operation.notification().unwrap_or_default(),
            "Operation pending"
        );

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match work().await {
            Ok((value, message)) => {
                operation.succeed(message)?;
                info!(operation_id = %operation.id(), kind = %kind, "Operation completed");
                Ok(Completed { operation, value })
            }
            Err(DomainError::Validation { summary, errors }) if kind.can_fail_while_pending() => {
                operation.reject(errors.clone(), summary.clone())?;
                warn!(operation_id = %operation.id(), kind = %kind, "Operation rejected while pending");
                operation.reset()?;
                Err(DomainError::validation(summary, errors))
            }
            Err(DomainError::Validation { summary, .. }) => Err(DomainError::internal(format!(
                "'{}' cannot be rejected once pending: {}",
                kind, summary
            ))),
            Err(error) => {
                warn!(operation_id = %operation.id(), kind = %kind, error = %error, "Operation aborted");
                Err(error)
            }
        }
    }
}

impl Default for OperationRunner {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
