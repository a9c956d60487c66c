//! Record service - patient record lookup

use std::sync::Arc;

use tracing::debug;

use crate::domain::patient::{filter_records, PatientRecord, PatientRecordRepository, RecordFilter};
use crate::domain::DomainError;

/// Matching records plus the size of the whole collection ("Showing X of Y")
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSearch {
    pub records: Vec<PatientRecord>,
    pub total_records: usize,
}

#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn PatientRecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn PatientRecordRepository>) -> Self {
        Self { repository }
    }

    /// Records matching the filter, in display order
    pub async fn search(&self, filter: &RecordFilter) -> Result<RecordSearch, DomainError> {
        let records = self.repository.list().await?;
        let matched = filter_records(&records, filter);

        debug!(
            query = %filter.query,
            status = %String::from(filter.status),
            matched = matched.len(),
            total = records.len(),
            "Filtered patient records"
        );

        Ok(RecordSearch {
            records: matched,
            total_records: records.len(),
        })
    }

    pub async fn get(&self, id: &str) -> Result<PatientRecord, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Patient record '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{seed_records, MockPatientRecordRepository, RiskStatus, StatusFilter};

    fn service_with_seed() -> RecordService {
        let mut repo = MockPatientRecordRepository::new();
        repo.expect_list().returning(|| Ok(seed_records()));
        RecordService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let result = service_with_seed()
            .search(&RecordFilter::new("garcia", StatusFilter::All))
            .await
            .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "Maria Garcia");
        assert_eq!(result.total_records, 8);
    }

    #[tokio::test]
    async fn test_search_by_status() {
        let result = service_with_seed()
            .search(&RecordFilter::new("", StatusFilter::Only(RiskStatus::HighRisk)))
            .await
            .unwrap();

        let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["PT-2024-001", "PT-2024-008"]);
    }

    #[tokio::test]
    async fn test_search_propagates_repository_errors() {
        let mut repo = MockPatientRecordRepository::new();
        repo.expect_list()
            .returning(|| Err(DomainError::internal("storage unavailable")));

        let result = RecordService::new(Arc::new(repo))
            .search(&RecordFilter::default())
            .await;

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let mut repo = MockPatientRecordRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = RecordService::new(Arc::new(repo))
            .get("PT-2024-999")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not found: Patient record 'PT-2024-999' not found");
    }
}
