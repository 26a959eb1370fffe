//! Irrigation scheduling
//!
//! Computes a field's water requirement and a multi-day event schedule.
//! Rainfall absent from the inputs is treated as 0mm, so a missing
//! observation yields the conservative dry-spell plan.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use shared::{
    validate_field_size, FieldSnapshot, IrrigationEvent, IrrigationFrequency, IrrigationMethod,
    IrrigationSchedule, WeatherObservation,
};

use crate::clock::Clock;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Service computing irrigation schedules
#[derive(Clone)]
pub struct IrrigationService {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl IrrigationService {
    /// Create a new IrrigationService instance
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Compute the water requirement and event schedule for a field
    pub fn schedule(
        &self,
        field: &FieldSnapshot,
        weather: Option<&WeatherObservation>,
    ) -> AppResult<IrrigationSchedule> {
        validate_field_size(field.size_hectares).map_err(|msg| {
            AppError::validation(
                "size_hectares",
                msg,
                "Площадь поля должна быть положительной",
            )
        })?;

        let cfg = &self.config.irrigation;
        let now = self.clock.now();

        let rainfall = weather.map(|w| w.rainfall_mm).unwrap_or(Decimal::ZERO);
        let dry_spell = rainfall < cfg.low_rainfall_mm;

        let multiplier = if dry_spell {
            cfg.dry_spell_multiplier
        } else {
            Decimal::ONE
        };
        let water_amount_mm = field.size_hectares * cfg.base_water_mm_per_hectare * multiplier;

        let days_until_next = if dry_spell { 1 } else { 3 };

        let events = irrigation_events(
            now,
            water_amount_mm,
            cfg.horizon_days,
            cfg.event_interval_days,
            cfg.event_duration_minutes,
        )
        .collect();

        Ok(IrrigationSchedule {
            next_irrigation: now + Duration::days(days_until_next),
            water_amount_mm,
            frequency: IrrigationFrequency::EveryThreeDays,
            method: IrrigationMethod::Drip,
            events,
        })
    }
}

/// Planned irrigation events over a horizon, one every `interval_days`
/// starting today.
///
/// Restartable: calling again with the same arguments yields the same
/// finite sequence.
pub fn irrigation_events(
    start: DateTime<Utc>,
    water_amount_mm: Decimal,
    horizon_days: i64,
    interval_days: i64,
    duration_minutes: i32,
) -> impl Iterator<Item = IrrigationEvent> {
    (0..horizon_days)
        .step_by(interval_days.max(1) as usize)
        .map(move |day| IrrigationEvent {
            date: start + Duration::days(day),
            water_amount_mm,
            duration_minutes,
            notes: "Regular irrigation schedule".to_string(),
        })
}
