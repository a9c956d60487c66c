//! In-memory patient record repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::error::DomainError;
use crate::domain::patient::{seed_records, PatientRecord, PatientRecordRepository};

/// In-memory implementation of PatientRecordRepository.
/// Records keep their insertion order, which is the display order.
#[derive(Debug)]
pub struct InMemoryPatientRecordRepository {
    records: Arc<RwLock<Vec<PatientRecord>>>,
}

impl InMemoryPatientRecordRepository {
    pub fn new(records: Vec<PatientRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Repository holding the eight demo records
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }
}

impl Default for InMemoryPatientRecordRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PatientRecordRepository for InMemoryPatientRecordRepository {
    async fn list(&self) -> Result<Vec<PatientRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<PatientRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.id.eq_ignore_ascii_case(id))
            .cloned())
    }
}
