//! Patient record search

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{PatientRecord, RiskStatus};

/// Status dropdown of the record lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(RiskStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: RiskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            return Ok(Self::All);
        }
        s.parse::<RiskStatus>()
            .map(Self::Only)
            .map_err(|_| format!("Unknown status filter '{}'", s))
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.label().to_string(),
        }
    }
}

/// Search box plus status dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: StatusFilter,
}

impl RecordFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Case-insensitive substring on ID or name, and status equality.
    /// An empty query matches every record.
    pub fn matches(&self, record: &PatientRecord) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = record.id.to_lowercase().contains(&query)
            || record.name.to_lowercase().contains(&query);

        matches_search && self.status.matches(record.status)
    }

    /// Whether the user narrowed the list at all
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status != StatusFilter::All
    }
}

/// Keep the matching records, in their original order
pub fn filter_records(records: &[PatientRecord], filter: &RecordFilter) -> Vec<PatientRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::seed_records;

    fn names(records: &[PatientRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let filter = RecordFilter::new("garcia", StatusFilter::All);
        let result = filter_records(&seed_records(), &filter);
        assert_eq!(names(&result), vec!["Maria Garcia"]);
    }

    #[test]
    fn test_status_only_filter() {
        let filter = RecordFilter::new("", StatusFilter::Only(RiskStatus::HighRisk));
        let result = filter_records(&seed_records(), &filter);
        assert_eq!(names(&result), vec!["John Anderson", "Lisa Taylor"]);
    }

    #[test]
    fn test_query_matches_id() {
        let filter = RecordFilter::new("pt-2024-00", StatusFilter::All);
        assert_eq!(filter_records(&seed_records(), &filter).len(), 8);

        let filter = RecordFilter::new("2024-003", StatusFilter::All);
        assert_eq!(names(&filter_records(&seed_records(), &filter)), vec!["Robert Chen"]);
    }

    #[test]
    fn test_combined_filters_preserve_order() {
        let filter = RecordFilter::new("a", StatusFilter::Only(RiskStatus::Benign));
        let result = filter_records(&seed_records(), &filter);
        assert_eq!(
            names(&result),
            vec!["Maria Garcia", "Emily Williams", "Sarah Johnson", "Michael Brown"]
        );
    }

    #[test]
    fn test_no_match() {
        let filter = RecordFilter::new("garcia", StatusFilter::Only(RiskStatus::HighRisk));
        assert!(filter_records(&seed_records(), &filter).is_empty());
        assert!(filter.is_active());
        assert!(!RecordFilter::default().is_active());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Moderate Risk".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(RiskStatus::ModerateRisk))
        );
        assert_eq!(
            "benign".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(RiskStatus::Benign))
        );
        assert!("urgent".parse::<StatusFilter>().is_err());
    }
}
