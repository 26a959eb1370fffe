//! Plant diagnosis service wrapping the label classifier

use std::sync::Arc;

use shared::{
    classify_diagnosis, validate_confidence, AlertSource, AlertType, DiagnosisInfo, RiskAlert,
};
use uuid::Uuid;

use crate::clock::{Clock, IdSource};
use crate::error::{AppError, AppResult};

/// Service for classifying disease labels and deriving disease alerts
#[derive(Clone)]
pub struct DiagnosisService {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl DiagnosisService {
    /// Create a new DiagnosisService instance
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self { clock, ids }
    }

    /// Classify a raw classifier label plus confidence into a diagnosis.
    ///
    /// Unknown labels degrade to confidence-based defaults; an
    /// out-of-range confidence is a caller contract violation.
    pub fn classify(&self, label: &str, confidence: f32) -> AppResult<DiagnosisInfo> {
        validate_confidence(confidence).map_err(|msg| {
            AppError::validation("confidence", msg, "Достоверность должна быть от 0.0 до 1.0")
        })?;

        let diagnosis = classify_diagnosis(label, confidence);
        tracing::debug!(
            label,
            severity = %diagnosis.severity,
            "classified diagnosis"
        );
        Ok(diagnosis)
    }

    /// Derive a disease alert from a diagnosis that requires action.
    ///
    /// Returns None for diagnoses below the action threshold. Disease
    /// alerts do not expire; the condition persists until treated.
    pub fn disease_alert(&self, field_id: Uuid, diagnosis: &DiagnosisInfo) -> Option<RiskAlert> {
        if !diagnosis.action_required {
            return None;
        }

        Some(RiskAlert {
            id: self.ids.next_id(),
            field_id: Some(field_id),
            title: format!("Disease Detected: {}", diagnosis.diagnosis),
            message: format!(
                "{} detected in your field (confidence {:.0}%). \
                 Monitor closely and check treatment recommendations.",
                diagnosis.diagnosis,
                diagnosis.confidence * 100.0
            ),
            alert_type: AlertType::Disease,
            severity: diagnosis.severity,
            action_required: true,
            source: AlertSource::Diagnosis,
            created_at: self.clock.now(),
            expires_at: None,
        })
    }
}
