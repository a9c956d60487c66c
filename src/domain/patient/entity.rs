//! Patient intake and record entities

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient sex as captured on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Self::Male, Self::Female, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown sex '{}'", s))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anatomical site of the lesion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LesionSite {
    Back,
    Arm,
    Leg,
    Face,
    Chest,
    Abdomen,
    Hand,
    Foot,
}

impl LesionSite {
    pub const ALL: [LesionSite; 8] = [
        Self::Back,
        Self::Arm,
        Self::Leg,
        Self::Face,
        Self::Chest,
        Self::Abdomen,
        Self::Hand,
        Self::Foot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Arm => "arm",
            Self::Leg => "leg",
            Self::Face => "face",
            Self::Chest => "chest",
            Self::Abdomen => "abdomen",
            Self::Hand => "hand",
            Self::Foot => "foot",
        }
    }
}

impl FromStr for LesionSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown lesion site '{}'", s))
    }
}

impl fmt::Display for LesionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw intake form exactly as submitted; every field is free text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub patient_id: String,
    pub age: String,
    pub sex: String,
    pub lesion_site: String,
}

/// Intake data that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFormData {
    pub patient_id: String,
    pub age: u8,
    pub sex: Sex,
    pub lesion_site: LesionSite,
}

/// Risk category attached to a stored diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    Benign,
}

impl RiskStatus {
    pub const ALL: [RiskStatus; 3] = [Self::HighRisk, Self::ModerateRisk, Self::Benign];

    /// Display label, also the value used by status filters
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::ModerateRisk => "Moderate Risk",
            Self::Benign => "Benign",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::HighRisk => "high_risk",
            Self::ModerateRisk => "moderate_risk",
            Self::Benign => "benign",
        }
    }
}

impl FromStr for RiskStatus {
    type Err = String;

    /// Accepts the display label or its snake_case form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s || v.slug() == s)
            .ok_or_else(|| format!("Unknown risk status '{}'", s))
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A patient's most recent diagnosis, as listed in the record lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub last_diagnosis: NaiveDate,
    pub prediction: String,
    /// Model confidence for `prediction`, in percent
    pub confidence: f64,
    pub status: RiskStatus,
}

impl PatientRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_diagnosis: NaiveDate,
        prediction: impl Into<String>,
        confidence: f64,
        status: RiskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_diagnosis,
            prediction: prediction.into(),
            confidence,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse() {
        assert_eq!("female".parse::<Sex>(), Ok(Sex::Female));
        assert!("Female".parse::<Sex>().is_err());
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn test_lesion_site_covers_eight_sites() {
        assert_eq!(LesionSite::ALL.len(), 8);
        for site in LesionSite::ALL {
            assert_eq!(site.as_str().parse::<LesionSite>(), Ok(site));
        }
        assert!("scalp".parse::<LesionSite>().is_err());
    }

    #[test]
    fn test_risk_status_labels() {
        assert_eq!("High Risk".parse::<RiskStatus>(), Ok(RiskStatus::HighRisk));
        assert_eq!("moderate_risk".parse::<RiskStatus>(), Ok(RiskStatus::ModerateRisk));
        assert!("high risk".parse::<RiskStatus>().is_err());

        let json = serde_json::to_string(&RiskStatus::HighRisk).unwrap();
        assert_eq!(json, "\"High Risk\"");
    }
}
