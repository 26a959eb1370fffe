//! Field models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-in-time description of one farmer's plot and its current crop.
///
/// Supplied by the caller for each advisory run and never mutated by the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub id: Uuid,
    pub crop_type: String,
    pub size_hectares: Decimal,
    pub soil_type: Option<SoilType>,
    pub planting_date: Option<NaiveDate>,
    pub growth_stage: Option<GrowthStage>,
}

/// Soil classes recognized by the crop advisor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silt,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Clay => write!(f, "clay"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Loamy => write!(f, "loamy"),
            SoilType::Silt => write!(f, "silt"),
        }
    }
}

/// Crop growth stages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    Flowering,
    Fruiting,
    Maturity,
}
