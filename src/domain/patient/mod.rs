//! Patient domain
//!
//! Intake form validation, the demo record collection, and record search.

mod entity;
mod filter;
mod repository;
mod seed;
mod validation;

pub use entity::{LesionSite, PatientForm, PatientFormData, PatientRecord, RiskStatus, Sex};
pub use filter::{filter_records, RecordFilter, StatusFilter};
pub use repository::PatientRecordRepository;
pub use seed::seed_records;
pub use validation::{
    validate_age, validate_lesion_site, validate_patient_form, validate_patient_id, validate_sex,
    MAX_AGE, MIN_AGE,
};

#[cfg(test)]
pub use repository::MockPatientRecordRepository;
