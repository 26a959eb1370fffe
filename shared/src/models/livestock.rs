//! Livestock health models

use serde::{Deserialize, Serialize};

/// Animal categories recognized by the triage engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Cattle,
    Sheep,
    Goat,
    Poultry,
    Other,
}

impl AnimalType {
    /// Parse a free-text animal description from the caller.
    ///
    /// Unknown descriptions map to `Other`, which the knowledge base
    /// serves with general livestock data.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "cattle" | "cow" => AnimalType::Cattle,
            "sheep" => AnimalType::Sheep,
            "goat" => AnimalType::Goat,
            "chicken" | "poultry" => AnimalType::Poultry,
            _ => AnimalType::Other,
        }
    }
}

impl std::fmt::Display for AnimalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimalType::Cattle => write!(f, "cattle"),
            AnimalType::Sheep => write!(f, "sheep"),
            AnimalType::Goat => write!(f, "goat"),
            AnimalType::Poultry => write!(f, "poultry"),
            AnimalType::Other => write!(f, "other"),
        }
    }
}

/// A reported livestock case: one animal, its observed symptoms, and the
/// farmer's own severity estimate on a 1-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalCase {
    pub animal_type: AnimalType,
    pub symptoms: Vec<String>,
    pub reported_severity: i32,
}

/// Triage urgency, totally ordered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    /// Monitor at home, routine care
    Low,
    /// Schedule vet visit within 1-2 days
    Medium,
    /// Visit vet within 24 hours
    High,
    /// Emergency, immediate vet attention required
    Critical,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "LOW"),
            Urgency::Medium => write!(f, "MEDIUM"),
            Urgency::High => write!(f, "HIGH"),
            Urgency::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Triage verdict for a livestock case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    pub urgency: Urgency,
    pub candidate_conditions: Vec<String>,
    pub recommendations: Vec<String>,
    pub requires_vet: bool,
    pub self_care_advice: Vec<String>,
    /// Signs that require an immediate vet visit
    pub warning_signs: Vec<String>,
    pub confidence: f32,
}

/// Reference profile of a livestock disease
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub name: String,
    pub common_symptoms: Vec<String>,
    pub description: String,
    pub prevention: Vec<String>,
    pub seasonal_risk: SeasonalRisk,
    pub contagious: bool,
    pub vaccination_available: bool,
}

/// When a disease is most likely to occur
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalRisk {
    YearRound,
    WetSeason,
    ColdSeason,
}

/// Vaccination schedule for one animal type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinationSchedule {
    pub animal_type: AnimalType,
    pub vaccines: Vec<VaccineInfo>,
}

/// One vaccine in a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineInfo {
    pub name: String,
    pub disease: String,
    /// Age at first administration
    pub age_months: i32,
    pub booster_required: bool,
    pub booster_interval_months: Option<i32>,
    pub mandatory: bool,
    pub notes: String,
}

/// A treatment option for a diagnosed condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentRecommendation {
    pub treatment: String,
    pub dosage: String,
    pub duration: String,
    pub frequency: String,
    pub instructions: Vec<String>,
    pub precautions: Vec<String>,
    pub requires_prescription: bool,
}
