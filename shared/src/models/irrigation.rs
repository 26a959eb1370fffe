//! Irrigation schedule models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Multi-day irrigation plan for a field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationSchedule {
    pub next_irrigation: DateTime<Utc>,
    pub water_amount_mm: Decimal,
    pub frequency: IrrigationFrequency,
    pub method: IrrigationMethod,
    pub events: Vec<IrrigationEvent>,
}

/// One planned watering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationEvent {
    pub date: DateTime<Utc>,
    pub water_amount_mm: Decimal,
    pub duration_minutes: i32,
    pub notes: String,
}

/// How often the field should be watered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationFrequency {
    Daily,
    EveryThreeDays,
    Weekly,
}

/// Irrigation delivery method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
}
