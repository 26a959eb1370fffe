//! Per-soil crop recommendation tables

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::{CropRecommendation, DemandLevel, SoilType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn recommendations_by_soil() -> HashMap<SoilType, Vec<CropRecommendation>> {
    let mut tables = HashMap::new();
    tables.insert(SoilType::Clay, clay_recommendations());
    tables.insert(SoilType::Sandy, sandy_recommendations());
    tables.insert(SoilType::Loamy, loamy_recommendations());
    tables
}

fn clay_recommendations() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            crop_name: "Wheat".to_string(),
            variety: "Spring Wheat".to_string(),
            suitability_score: 0.9,
            expected_yield_tons_per_hectare: Decimal::new(35, 1),
            growth_duration_days: 120,
            water_requirement: DemandLevel::Medium,
            difficulty: DemandLevel::Low,
            market_demand: DemandLevel::High,
            recommendations: strings(&["Clay soil ideal for wheat", "Ensure proper drainage"]),
        },
        CropRecommendation {
            crop_name: "Barley".to_string(),
            variety: "Malting Barley".to_string(),
            suitability_score: 0.85,
            expected_yield_tons_per_hectare: Decimal::new(30, 1),
            growth_duration_days: 110,
            water_requirement: DemandLevel::Medium,
            difficulty: DemandLevel::Low,
            market_demand: DemandLevel::Medium,
            recommendations: strings(&["Well-suited for clay soil", "Good market prices"]),
        },
    ]
}

fn sandy_recommendations() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            crop_name: "Potatoes".to_string(),
            variety: "Russet".to_string(),
            suitability_score: 0.9,
            expected_yield_tons_per_hectare: Decimal::from(25),
            growth_duration_days: 90,
            water_requirement: DemandLevel::High,
            difficulty: DemandLevel::Medium,
            market_demand: DemandLevel::High,
            recommendations: strings(&[
                "Sandy soil excellent for potatoes",
                "Regular irrigation required",
            ]),
        },
        CropRecommendation {
            crop_name: "Carrots".to_string(),
            variety: "Orange Carrots".to_string(),
            suitability_score: 0.85,
            expected_yield_tons_per_hectare: Decimal::from(20),
            growth_duration_days: 75,
            water_requirement: DemandLevel::Medium,
            difficulty: DemandLevel::Low,
            market_demand: DemandLevel::High,
            recommendations: strings(&[
                "Root vegetables thrive in sandy soil",
                "Good drainage",
            ]),
        },
    ]
}

fn loamy_recommendations() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            crop_name: "Tomatoes".to_string(),
            variety: "Beefsteak".to_string(),
            suitability_score: 0.95,
            expected_yield_tons_per_hectare: Decimal::from(50),
            growth_duration_days: 80,
            water_requirement: DemandLevel::Medium,
            difficulty: DemandLevel::Medium,
            market_demand: DemandLevel::High,
            recommendations: strings(&[
                "Loamy soil ideal for most crops",
                "Perfect water retention",
            ]),
        },
        CropRecommendation {
            crop_name: "Corn".to_string(),
            variety: "Sweet Corn".to_string(),
            suitability_score: 0.9,
            expected_yield_tons_per_hectare: Decimal::from(8),
            growth_duration_days: 90,
            water_requirement: DemandLevel::High,
            difficulty: DemandLevel::Low,
            market_demand: DemandLevel::High,
            recommendations: strings(&["Excellent soil for corn", "High yield potential"]),
        },
    ]
}
