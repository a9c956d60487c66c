//! Admin dashboard figures
//!
//! Static series standing in for audit and monitoring data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCounters {
    pub total_diagnoses: u32,
    pub active_doctors: u32,
    pub model_accuracy_percent: f64,
    pub avg_inference_seconds: f64,
    pub total_patients: u32,
    pub total_reports: u32,
    pub high_risk_cases: u32,
    pub benign_cases: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceMetrics {
    pub reports_reviewed_percent: f64,
    pub follow_up_documented_percent: f64,
    pub audit_trail_complete_percent: f64,
}

/// Weekly model quality sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub week: String,
    pub f1_score: f64,
    pub accuracy: f64,
    pub precision: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorActivity {
    pub doctor: String,
    pub diagnoses: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub summary: SummaryCounters,
    pub compliance: ComplianceMetrics,
    pub performance_trend: Vec<PerformancePoint>,
    pub doctor_activity: Vec<DoctorActivity>,
    pub classification_breakdown: Vec<ClassCount>,
}

/// The deployed classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub version: String,
    pub last_updated: String,
    pub validation_accuracy_percent: f64,
    pub training_dataset: String,
}

impl ModelInfo {
    pub fn current() -> Self {
        Self {
            version: "v2.3.1-ResNet50".to_string(),
            last_updated: "2025-11-15".to_string(),
            validation_accuracy_percent: 94.2,
            training_dataset: "HAM10000 (10,015 images)".to_string(),
        }
    }
}

fn point(week: u32, f1_score: f64, accuracy: f64, precision: f64) -> PerformancePoint {
    PerformancePoint {
        week: format!("Week {}", week),
        f1_score,
        accuracy,
        precision,
    }
}

fn activity(doctor: &str, diagnoses: u32) -> DoctorActivity {
    DoctorActivity {
        doctor: doctor.to_string(),
        diagnoses,
    }
}

fn count(class: &str, count: u32) -> ClassCount {
    ClassCount {
        class: class.to_string(),
        count,
    }
}

impl DashboardSnapshot {
    pub fn current() -> Self {
        Self {
            summary: SummaryCounters {
                total_diagnoses: 1847,
                active_doctors: 24,
                model_accuracy_percent: 93.2,
                avg_inference_seconds: 4.5,
                total_patients: 1234,
                total_reports: 1847,
                high_risk_cases: 67,
                benign_cases: 1512,
            },
            compliance: ComplianceMetrics {
                reports_reviewed_percent: 98.5,
                follow_up_documented_percent: 94.2,
                audit_trail_complete_percent: 100.0,
            },
            performance_trend: vec![
                point(1, 0.87, 0.89, 0.88),
                point(2, 0.88, 0.90, 0.89),
                point(3, 0.89, 0.91, 0.90),
                point(4, 0.90, 0.92, 0.91),
                point(5, 0.89, 0.91, 0.90),
                point(6, 0.91, 0.93, 0.92),
            ],
            doctor_activity: vec![
                activity("Dr. Johnson", 45),
                activity("Dr. Chen", 38),
                activity("Dr. Rodriguez", 42),
                activity("Dr. Williams", 35),
                activity("Dr. Martinez", 29),
            ],
            classification_breakdown: vec![
                count("Melanoma", 23),
                count("Nevus", 78),
                count("BCC", 15),
                count("Actinic Keratosis", 12),
                count("Others", 31),
            ],
        }
    }

    /// Week with the best F1 score; earliest wins a tie
    pub fn best_week(&self) -> Option<&PerformancePoint> {
        self.performance_trend
            .iter()
            .reduce(|best, p| if p.f1_score > best.f1_score { p } else { best })
    }
}
