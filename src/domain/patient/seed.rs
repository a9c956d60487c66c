//! Demo patient records shown by the record lookup

use chrono::NaiveDate;

use super::entity::{PatientRecord, RiskStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The eight records the lookup screen starts with, newest first
pub fn seed_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new("PT-2024-001", "John Anderson", date(2025, 12, 10), "Melanoma", 92.5, RiskStatus::HighRisk),
        PatientRecord::new("PT-2024-002", "Maria Garcia", date(2025, 12, 9), "Nevus", 88.3, RiskStatus::Benign),
        PatientRecord::new("PT-2024-003", "Robert Chen", date(2025, 12, 8), "Basal Cell Carcinoma", 85.7, RiskStatus::ModerateRisk),
        PatientRecord::new("PT-2024-004", "Emily Williams", date(2025, 12, 7), "Benign Keratosis", 91.2, RiskStatus::Benign),
        PatientRecord::new("PT-2024-005", "David Martinez", date(2025, 12, 6), "Actinic Keratosis", 79.4, RiskStatus::ModerateRisk),
        PatientRecord::new("PT-2024-006", "Sarah Johnson", date(2025, 12, 5), "Nevus", 94.8, RiskStatus::Benign),
        PatientRecord::new("PT-2024-007", "Michael Brown", date(2025, 12, 4), "Dermatofibroma", 82.1, RiskStatus::Benign),
        PatientRecord::new("PT-2024-008", "Lisa Taylor", date(2025, 12, 3), "Melanoma", 87.9, RiskStatus::HighRisk),
    ]
}
