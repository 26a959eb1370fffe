//! Static reference tables
//!
//! Disease profiles, vaccination schedules, treatment options, and
//! per-soil crop recommendations. Loaded once at process start and
//! read-only for the lifetime of the process; concurrent reads need no
//! locking. The engine never creates, updates, or deletes entries.

mod crops;
mod livestock;

use std::collections::HashMap;

use shared::{
    AnimalType, CropRecommendation, DiseaseProfile, SoilType, TreatmentRecommendation,
    VaccinationSchedule,
};

/// Immutable reference data consulted by the generators
#[derive(Debug)]
pub struct KnowledgeBase {
    livestock_diseases: HashMap<AnimalType, Vec<DiseaseProfile>>,
    vaccination_schedules: HashMap<AnimalType, VaccinationSchedule>,
    crop_recommendations: HashMap<SoilType, Vec<CropRecommendation>>,
}

impl KnowledgeBase {
    /// Build the reference tables
    pub fn load() -> Self {
        Self {
            livestock_diseases: livestock::disease_profiles(),
            vaccination_schedules: livestock::vaccination_schedules(),
            crop_recommendations: crops::recommendations_by_soil(),
        }
    }

    /// Common diseases for an animal type.
    ///
    /// Animal types without a dedicated table fall back to the cattle
    /// table as general livestock data.
    pub fn diseases_for(&self, animal_type: AnimalType) -> &[DiseaseProfile] {
        self.livestock_diseases
            .get(&animal_type)
            .or_else(|| self.livestock_diseases.get(&AnimalType::Cattle))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Vaccination schedule for an animal type, if one is published
    pub fn vaccination_schedule(&self, animal_type: AnimalType) -> Option<&VaccinationSchedule> {
        self.vaccination_schedules.get(&animal_type)
    }

    /// Treatment options for a diagnosed condition.
    ///
    /// The current table carries a generic supportive-care protocol for
    /// every diagnosis; condition-specific protocols are a data update,
    /// not a code change.
    pub fn treatments_for(&self, _diagnosis: &str) -> Vec<TreatmentRecommendation> {
        livestock::supportive_care()
    }

    /// Crops suited to a soil type; unknown or missing soil falls back to
    /// the loamy table
    pub fn recommended_crops(&self, soil_type: Option<SoilType>) -> &[CropRecommendation] {
        let soil = match soil_type {
            Some(SoilType::Clay) => SoilType::Clay,
            Some(SoilType::Sandy) => SoilType::Sandy,
            _ => SoilType::Loamy,
        };
        self.crop_recommendations
            .get(&soil)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::load()
    }
}
