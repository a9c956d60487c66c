//! Patient record repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::PatientRecord;
use crate::domain::error::DomainError;

/// Read access to the patient record collection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PatientRecordRepository: Send + Sync {
    /// All records in display order
    async fn list(&self) -> Result<Vec<PatientRecord>, DomainError>;

    /// Find a record by its patient ID
    async fn get(&self, id: &str) -> Result<Option<PatientRecord>, DomainError>;
}
