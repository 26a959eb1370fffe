//! Crop advisor: task and risk alert generation
//!
//! Rule-based heuristics over a field snapshot and an optional weather
//! observation. Each rule is evaluated independently; missing weather
//! disables the weather rules and nothing else.

use std::sync::Arc;

use chrono::{Datelike, Duration};
use shared::{
    validate_field_size, AlertSource, AlertType, CropRecommendation, CropTask, FieldSnapshot,
    RiskAlert, Severity, TaskPriority, TaskSource, TaskType, WeatherObservation,
};

use crate::clock::{Clock, IdSource};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::knowledge::KnowledgeBase;

/// Service generating crop tasks and risk alerts for a field
#[derive(Clone)]
pub struct AdvisorService {
    config: Config,
    kb: Arc<KnowledgeBase>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl AdvisorService {
    /// Create a new AdvisorService instance
    pub fn new(
        config: Config,
        kb: Arc<KnowledgeBase>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        Self {
            config,
            kb,
            clock,
            ids,
        }
    }

    /// Generate timed agronomic tasks for a field.
    ///
    /// Zero or more rules may fire; output order is fixed (irrigation,
    /// fertilization, pest check, weeding).
    pub fn generate_tasks(
        &self,
        field: &FieldSnapshot,
        weather: Option<&WeatherObservation>,
    ) -> AppResult<Vec<CropTask>> {
        validate_snapshot(field)?;

        let now = self.clock.now();
        let mut tasks = Vec::new();

        // Rule 1: irrigation when recent rainfall is low
        if let Some(w) = weather {
            if w.rainfall_mm < self.config.irrigation.low_rainfall_mm {
                let priority = if w.rainfall_mm < self.config.irrigation.critical_rainfall_mm {
                    TaskPriority::High
                } else {
                    TaskPriority::Medium
                };
                tasks.push(CropTask {
                    id: self.ids.next_id(),
                    field_id: field.id,
                    title: format!("Irrigate {} field", field.crop_type),
                    description: format!(
                        "Low rainfall detected ({}mm). Water plants to maintain soil moisture.",
                        w.rainfall_mm
                    ),
                    task_type: TaskType::Irrigation,
                    priority,
                    due_at: now + Duration::days(1),
                    source: TaskSource::WeatherAlert,
                    created_at: now,
                });
            }
        }

        // Rule 2: fertilization once the crop is established
        if let Some(planting_date) = field.planting_date {
            let days_since_planting = (now.date_naive() - planting_date).num_days();
            if days_since_planting > 30 {
                tasks.push(CropTask {
                    id: self.ids.next_id(),
                    field_id: field.id,
                    title: format!("Fertilize {} field", field.crop_type),
                    description: format!(
                        "Apply fertilizer for {}. Recommended: NPK 20-10-10.",
                        field.crop_type
                    ),
                    task_type: TaskType::Fertilization,
                    priority: TaskPriority::Medium,
                    due_at: now + Duration::days(7),
                    source: TaskSource::Ai,
                    created_at: now,
                });
            }
        }

        // Rule 3: pest inspection during the growing season
        if self.config.seasons.is_growing_season(now.month()) {
            tasks.push(CropTask {
                id: self.ids.next_id(),
                field_id: field.id,
                title: "Inspect for Pests".to_string(),
                description: "Check plants for pest damage. Look for leaf damage, \
                              discoloration, or pest presence."
                    .to_string(),
                task_type: TaskType::PestControl,
                priority: TaskPriority::Medium,
                due_at: now + Duration::days(3),
                source: TaskSource::Ai,
                created_at: now,
            });
        }

        // Rule 4: regular weeding
        tasks.push(CropTask {
            id: self.ids.next_id(),
            field_id: field.id,
            title: "Weed Control".to_string(),
            description: "Remove weeds to reduce competition for nutrients and water."
                .to_string(),
            task_type: TaskType::Weeding,
            priority: TaskPriority::Low,
            due_at: now + Duration::days(5),
            source: TaskSource::Ai,
            created_at: now,
        });

        tracing::debug!(field_id = %field.id, count = tasks.len(), "generated crop tasks");
        Ok(tasks)
    }

    /// Generate weather and season risk alerts for a field.
    ///
    /// Weather rules are evaluated only when an observation is present;
    /// output order is fixed (frost, drought, heavy rain, wind, pest
    /// season).
    pub fn generate_alerts(
        &self,
        field: &FieldSnapshot,
        weather: Option<&WeatherObservation>,
    ) -> AppResult<Vec<RiskAlert>> {
        validate_snapshot(field)?;

        let now = self.clock.now();
        let mut alerts = Vec::new();

        if let Some(w) = weather {
            if w.temperature_celsius < self.config.alerts.frost_temp_celsius {
                alerts.push(RiskAlert {
                    id: self.ids.next_id(),
                    field_id: Some(field.id),
                    title: "Frost Risk Alert".to_string(),
                    message: format!(
                        "Temperature dropping to {}°C. Protect sensitive plants from frost damage.",
                        w.temperature_celsius
                    ),
                    alert_type: AlertType::Weather,
                    severity: Severity::High,
                    action_required: true,
                    source: AlertSource::Weather,
                    created_at: now,
                    expires_at: Some(now + Duration::hours(24)),
                });
            }

            if w.rainfall_mm < self.config.alerts.drought_rainfall_mm {
                alerts.push(RiskAlert {
                    id: self.ids.next_id(),
                    field_id: Some(field.id),
                    title: "Drought Risk".to_string(),
                    message: format!(
                        "Low rainfall ({}mm). Increase irrigation frequency.",
                        w.rainfall_mm
                    ),
                    alert_type: AlertType::Weather,
                    severity: Severity::Medium,
                    action_required: true,
                    source: AlertSource::Weather,
                    created_at: now,
                    expires_at: None,
                });
            }

            if w.rainfall_mm > self.config.alerts.heavy_rain_mm {
                alerts.push(RiskAlert {
                    id: self.ids.next_id(),
                    field_id: Some(field.id),
                    title: "Heavy Rain Warning".to_string(),
                    message: format!(
                        "Heavy rainfall expected ({}mm). Check drainage and protect crops.",
                        w.rainfall_mm
                    ),
                    alert_type: AlertType::Weather,
                    severity: Severity::High,
                    action_required: true,
                    source: AlertSource::Weather,
                    created_at: now,
                    expires_at: None,
                });
            }

            if w.wind_kph > self.config.alerts.high_wind_kph {
                alerts.push(RiskAlert {
                    id: self.ids.next_id(),
                    field_id: Some(field.id),
                    title: "High Wind Alert".to_string(),
                    message: format!(
                        "Strong winds expected ({} km/h). Secure loose materials and protect plants.",
                        w.wind_kph
                    ),
                    alert_type: AlertType::Weather,
                    severity: Severity::Medium,
                    action_required: true,
                    source: AlertSource::Weather,
                    created_at: now,
                    expires_at: None,
                });
            }
        }

        if self.config.seasons.is_pest_season(now.month()) {
            alerts.push(RiskAlert {
                id: self.ids.next_id(),
                field_id: Some(field.id),
                title: "Pest Season Alert".to_string(),
                message: "High pest activity season. Monitor crops regularly and consider \
                          preventive measures."
                    .to_string(),
                alert_type: AlertType::Pest,
                severity: Severity::Low,
                action_required: false,
                source: AlertSource::Advisor,
                created_at: now,
                expires_at: None,
            });
        }

        tracing::debug!(field_id = %field.id, count = alerts.len(), "generated risk alerts");
        Ok(alerts)
    }

    /// Crops suited to the field's soil type
    pub fn recommended_crops(&self, field: &FieldSnapshot) -> &[CropRecommendation] {
        self.kb.recommended_crops(field.soil_type)
    }
}

fn validate_snapshot(field: &FieldSnapshot) -> AppResult<()> {
    validate_field_size(field.size_hectares).map_err(|msg| {
        AppError::validation(
            "size_hectares",
            msg,
            "Площадь поля должна быть положительной",
        )
    })
}
