//! Risk alert models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Severity;

/// A risk alert raised for a field or for the whole farm.
///
/// Created by the engine; read/dismissed/expired state belongs to the
/// caller and is never recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAlert {
    pub id: Uuid,
    pub field_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub action_required: bool,
    pub source: AlertSource,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Categories of risk alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Weather,
    Disease,
    Pest,
    Irrigation,
    General,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Weather => write!(f, "weather"),
            AlertType::Disease => write!(f, "disease"),
            AlertType::Pest => write!(f, "pest"),
            AlertType::Irrigation => write!(f, "irrigation"),
            AlertType::General => write!(f, "general"),
        }
    }
}

/// Originating subsystem of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSource {
    Weather,
    Advisor,
    Diagnosis,
    System,
}
