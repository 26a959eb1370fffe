//! Demo fixtures for UI prototyping
//!
//! Everything in this module is sample data for screens and walkthroughs.
//! The rule engine in [`crate::services`] never calls into it; randomness
//! stays on this side of the boundary.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{classify_diagnosis, AlertSource, AlertType, DiagnosisInfo, RiskAlert, Severity};
use uuid::Uuid;

/// Plausible classifier outputs for demo screens
const MOCK_DIAGNOSES: &[(&str, f32)] = &[
    ("Healthy Plant", 0.92),
    ("Early Blight", 0.85),
    ("Late Blight", 0.78),
    ("Leaf Spot", 0.81),
    ("Powdery Mildew", 0.76),
    ("Bacterial Wilt", 0.73),
    ("Mosaic Virus", 0.70),
    ("Nutrient Deficiency (Nitrogen)", 0.68),
    ("Pest Damage", 0.75),
    ("Sunburn Stress", 0.65),
];

/// A random but internally consistent diagnosis, produced by running a
/// randomly chosen label through the real classifier
pub fn mock_diagnosis<R: Rng + ?Sized>(rng: &mut R) -> DiagnosisInfo {
    let (label, confidence) = MOCK_DIAGNOSES
        .choose(rng)
        .copied()
        .unwrap_or(("Healthy Plant", 0.92));
    classify_diagnosis(label, confidence)
}

/// Representative alerts for a demo dashboard
pub fn demo_alerts(field_id: Option<Uuid>, now: DateTime<Utc>) -> Vec<RiskAlert> {
    vec![
        RiskAlert {
            id: Uuid::new_v4(),
            field_id,
            title: "Heavy Rain Warning".to_string(),
            message: "Heavy rainfall expected in the next 24 hours. Consider postponing \
                      irrigation."
                .to_string(),
            alert_type: AlertType::Weather,
            severity: Severity::Medium,
            action_required: true,
            source: AlertSource::Weather,
            created_at: now,
            expires_at: Some(now + Duration::days(1)),
        },
        RiskAlert {
            id: Uuid::new_v4(),
            field_id,
            title: "Irrigation Reminder".to_string(),
            message: "Your wheat field hasn't been irrigated in 5 days. Consider scheduling \
                      irrigation soon."
                .to_string(),
            alert_type: AlertType::Irrigation,
            severity: Severity::Low,
            action_required: true,
            source: AlertSource::Advisor,
            created_at: now - Duration::days(2),
            expires_at: None,
        },
        RiskAlert {
            id: Uuid::new_v4(),
            field_id,
            title: "Frost Risk".to_string(),
            message: "Temperature expected to drop below 0°C tonight. Protect sensitive crops."
                .to_string(),
            alert_type: AlertType::Weather,
            severity: Severity::High,
            action_required: true,
            source: AlertSource::Weather,
            created_at: now,
            expires_at: Some(now + Duration::hours(12)),
        },
        RiskAlert {
            id: Uuid::new_v4(),
            field_id,
            title: "Disease Detection".to_string(),
            message: "Potential wheat rust detected in your photo. Monitor closely and consider \
                      treatment."
                .to_string(),
            alert_type: AlertType::Disease,
            severity: Severity::High,
            action_required: true,
            source: AlertSource::Diagnosis,
            created_at: now - Duration::days(1),
            expires_at: None,
        },
        RiskAlert {
            id: Uuid::new_v4(),
            field_id: None,
            title: "System Update Available".to_string(),
            message: "A new version of the app is available with improved disease detection."
                .to_string(),
            alert_type: AlertType::General,
            severity: Severity::Low,
            action_required: false,
            source: AlertSource::System,
            created_at: now - Duration::days(3),
            expires_at: Some(now + Duration::days(7)),
        },
    ]
}
