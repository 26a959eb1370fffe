//! Crop recommendation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A crop suggested for a field, with suitability and effort estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_name: String,
    pub variety: String,
    /// 0.0 to 1.0
    pub suitability_score: f32,
    pub expected_yield_tons_per_hectare: Decimal,
    pub growth_duration_days: i32,
    pub water_requirement: DemandLevel,
    pub difficulty: DemandLevel,
    pub market_demand: DemandLevel,
    pub recommendations: Vec<String>,
}

/// Coarse low/medium/high scale used for crop demands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}
