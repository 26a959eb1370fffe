//! Plant diagnosis models and label classification
//!
//! Maps free-text disease labels from an image classifier to a severity
//! tier and disease taxonomy. The rules are ordered keyword lists so the
//! behavior stays auditable; first matching rule wins.

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Diagnosis derived from a classifier label and confidence score.
///
/// Fully determined by `(label, confidence)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisInfo {
    /// Display-formatted label, e.g. "Late Blight"
    pub diagnosis: String,
    pub confidence: f32,
    pub severity: Severity,
    pub disease_type: DiseaseType,
    pub affected_part: AffectedPart,
    pub spread_risk: SpreadRisk,
    pub action_required: bool,
}

/// Disease taxonomy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseType {
    None,
    Viral,
    Bacterial,
    Fungal,
    Nutrient,
    Pest,
    Environmental,
    Unknown,
}

/// Affected plant part
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AffectedPart {
    Leaves,
    Stem,
    Fruit,
    Roots,
    Flowers,
    WholePlant,
}

/// Risk of the condition spreading to neighboring plants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SpreadRisk {
    None,
    Low,
    Medium,
    High,
}

/// Diseases that can destroy a crop if untreated
const CRITICAL_DISEASES: &[&str] = &[
    "late blight",
    "bacterial wilt",
    "virus",
    "mosaic",
    "wilt",
    "root rot",
    "stem rot",
    "canker",
];

const HIGH_SEVERITY_DISEASES: &[&str] =
    &["early blight", "rust", "anthracnose", "scab", "fire blight"];

const MEDIUM_SEVERITY_DISEASES: &[&str] = &["leaf spot", "mildew", "mold", "leaf curl"];

const LOW_SEVERITY_ISSUES: &[&str] = &["nutrient", "deficiency", "environmental", "minor"];

/// Classify a raw classifier label plus confidence into a full diagnosis.
///
/// Unknown or empty labels degrade to confidence-based defaults rather
/// than failing.
pub fn classify_diagnosis(label: &str, confidence: f32) -> DiagnosisInfo {
    let normalized = normalize_label(label);

    let severity = severity_for_label(&normalized, confidence);
    let disease_type = disease_type_for_label(&normalized);
    let affected_part = affected_part_for_label(&normalized);
    let spread_risk = spread_risk_for(disease_type);

    DiagnosisInfo {
        diagnosis: format_diagnosis_label(label),
        confidence,
        severity,
        disease_type,
        affected_part,
        spread_risk,
        action_required: severity.requires_action(),
    }
}

/// Lowercase, trim, and fold underscores to spaces so underscore-separated
/// model labels ("Late_Blight") match the keyword lists.
fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace('_', " ")
}

/// Severity decision: first matching rule wins
fn severity_for_label(label: &str, confidence: f32) -> Severity {
    if label.contains("healthy") {
        return Severity::Low;
    }

    if CRITICAL_DISEASES.iter().any(|kw| label.contains(kw)) {
        return if confidence > 0.8 {
            Severity::Critical
        } else {
            Severity::High
        };
    }

    if HIGH_SEVERITY_DISEASES.iter().any(|kw| label.contains(kw)) {
        return if confidence > 0.8 {
            Severity::High
        } else {
            Severity::Medium
        };
    }

    if MEDIUM_SEVERITY_DISEASES.iter().any(|kw| label.contains(kw)) {
        return Severity::Medium;
    }

    if LOW_SEVERITY_ISSUES.iter().any(|kw| label.contains(kw)) {
        return Severity::Low;
    }

    // Unrecognized label: fall back on confidence alone
    if confidence > 0.9 {
        Severity::High
    } else if confidence > 0.7 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn disease_type_for_label(label: &str) -> DiseaseType {
    if label.contains("healthy") {
        DiseaseType::None
    } else if label.contains("virus") || label.contains("mosaic") {
        DiseaseType::Viral
    } else if label.contains("bacteria") || (label.contains("wilt") && !label.contains("fusarium"))
    {
        DiseaseType::Bacterial
    } else if label.contains("fungus")
        || label.contains("blight")
        || label.contains("rust")
        || label.contains("mildew")
        || label.contains("spot")
        || label.contains("rot")
    {
        DiseaseType::Fungal
    } else if label.contains("nutrient") || label.contains("deficiency") {
        DiseaseType::Nutrient
    } else if label.contains("pest") || label.contains("insect") {
        DiseaseType::Pest
    } else if label.contains("environmental") || label.contains("stress") {
        DiseaseType::Environmental
    } else {
        DiseaseType::Unknown
    }
}

fn affected_part_for_label(label: &str) -> AffectedPart {
    if label.contains("leaf") || label.contains("foliage") {
        AffectedPart::Leaves
    } else if label.contains("stem") || label.contains("stalk") {
        AffectedPart::Stem
    } else if label.contains("fruit") || label.contains("berry") {
        AffectedPart::Fruit
    } else if label.contains("root") {
        AffectedPart::Roots
    } else if label.contains("flower") || label.contains("blossom") {
        AffectedPart::Flowers
    } else {
        AffectedPart::WholePlant
    }
}

/// Spread risk is a pure function of the disease type
pub fn spread_risk_for(disease_type: DiseaseType) -> SpreadRisk {
    match disease_type {
        DiseaseType::Viral | DiseaseType::Bacterial => SpreadRisk::High,
        DiseaseType::Fungal | DiseaseType::Pest => SpreadRisk::Medium,
        DiseaseType::Nutrient | DiseaseType::Environmental => SpreadRisk::None,
        DiseaseType::None | DiseaseType::Unknown => SpreadRisk::Low,
    }
}

/// Format a raw label for display: underscores to spaces, words capitalized
fn format_diagnosis_label(label: &str) -> String {
    label
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
