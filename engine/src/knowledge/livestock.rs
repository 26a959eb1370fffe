//! Livestock disease, vaccination, and treatment tables

use std::collections::HashMap;

use shared::{
    AnimalType, DiseaseProfile, SeasonalRisk, TreatmentRecommendation, VaccinationSchedule,
    VaccineInfo,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn disease_profiles() -> HashMap<AnimalType, Vec<DiseaseProfile>> {
    let mut tables = HashMap::new();
    tables.insert(AnimalType::Cattle, cattle_diseases());
    tables.insert(AnimalType::Sheep, sheep_diseases());
    tables.insert(AnimalType::Goat, goat_diseases());
    tables.insert(AnimalType::Poultry, poultry_diseases());
    tables
}

fn cattle_diseases() -> Vec<DiseaseProfile> {
    vec![
        DiseaseProfile {
            name: "Mastitis".to_string(),
            common_symptoms: strings(&["Swollen udder", "Hot udder", "Abnormal milk", "Fever"]),
            description: "Inflammation of the mammary gland, usually caused by bacterial infection"
                .to_string(),
            prevention: strings(&[
                "Maintain clean milking environment",
                "Practice proper milking hygiene",
                "Regular udder health checks",
                "Dry off properly",
            ]),
            seasonal_risk: SeasonalRisk::YearRound,
            contagious: true,
            vaccination_available: false,
        },
        DiseaseProfile {
            name: "Foot and Mouth Disease".to_string(),
            common_symptoms: strings(&["Blisters on mouth", "Lameness", "Fever", "Drooling"]),
            description: "Highly contagious viral disease affecting cloven-hoofed animals"
                .to_string(),
            prevention: strings(&[
                "Vaccination",
                "Biosecurity measures",
                "Quarantine new animals",
                "Regular hoof trimming",
            ]),
            seasonal_risk: SeasonalRisk::WetSeason,
            contagious: true,
            vaccination_available: true,
        },
    ]
}

fn sheep_diseases() -> Vec<DiseaseProfile> {
    vec![DiseaseProfile {
        name: "Foot Rot".to_string(),
        common_symptoms: strings(&[
            "Limping",
            "Foul smell",
            "Infected hooves",
            "Reluctance to walk",
        ]),
        description: "Bacterial infection of the hoof causing severe lameness".to_string(),
        prevention: strings(&[
            "Keep hooves dry",
            "Regular foot trimming",
            "Footbath with zinc sulfate",
            "Isolate infected animals",
        ]),
        seasonal_risk: SeasonalRisk::WetSeason,
        contagious: true,
        vaccination_available: true,
    }]
}

fn goat_diseases() -> Vec<DiseaseProfile> {
    vec![DiseaseProfile {
        name: "Pneumonia".to_string(),
        common_symptoms: strings(&[
            "Coughing",
            "Nasal discharge",
            "Difficulty breathing",
            "Fever",
        ]),
        description: "Respiratory infection common in goats, especially young kids".to_string(),
        prevention: strings(&[
            "Adequate ventilation",
            "Avoid overcrowding",
            "Vaccination",
            "Good nutrition",
        ]),
        seasonal_risk: SeasonalRisk::ColdSeason,
        contagious: true,
        vaccination_available: true,
    }]
}

fn poultry_diseases() -> Vec<DiseaseProfile> {
    vec![DiseaseProfile {
        name: "Newcastle Disease".to_string(),
        common_symptoms: strings(&[
            "Respiratory distress",
            "Diarrhea",
            "Twisted neck",
            "Sudden death",
        ]),
        description: "Highly contagious viral disease in poultry".to_string(),
        prevention: strings(&[
            "Vaccination (mandatory)",
            "Biosecurity",
            "Isolate new birds",
            "Proper sanitation",
        ]),
        seasonal_risk: SeasonalRisk::YearRound,
        contagious: true,
        vaccination_available: true,
    }]
}

pub(super) fn vaccination_schedules() -> HashMap<AnimalType, VaccinationSchedule> {
    let mut schedules = HashMap::new();
    schedules.insert(AnimalType::Cattle, cattle_schedule());
    schedules.insert(AnimalType::Sheep, sheep_schedule());
    schedules.insert(AnimalType::Goat, goat_schedule());
    schedules.insert(AnimalType::Poultry, poultry_schedule());
    schedules
}

fn cattle_schedule() -> VaccinationSchedule {
    VaccinationSchedule {
        animal_type: AnimalType::Cattle,
        vaccines: vec![
            VaccineInfo {
                name: "FMD Vaccine".to_string(),
                disease: "Foot and Mouth Disease".to_string(),
                age_months: 4,
                booster_required: true,
                booster_interval_months: Some(6),
                mandatory: true,
                notes: "Critical for disease control".to_string(),
            },
            VaccineInfo {
                name: "Anthrax Vaccine".to_string(),
                disease: "Anthrax".to_string(),
                age_months: 6,
                booster_required: true,
                booster_interval_months: Some(12),
                mandatory: true,
                notes: "Annual vaccination recommended".to_string(),
            },
            VaccineInfo {
                name: "Brucellosis Vaccine".to_string(),
                disease: "Brucellosis".to_string(),
                age_months: 3,
                booster_required: false,
                booster_interval_months: None,
                mandatory: true,
                notes: "Single dose for heifers".to_string(),
            },
        ],
    }
}

fn sheep_schedule() -> VaccinationSchedule {
    VaccinationSchedule {
        animal_type: AnimalType::Sheep,
        vaccines: vec![
            VaccineInfo {
                name: "Clostridial Vaccine".to_string(),
                disease: "Enterotoxemia, Tetanus".to_string(),
                age_months: 2,
                booster_required: true,
                booster_interval_months: Some(12),
                mandatory: true,
                notes: "Essential for all sheep".to_string(),
            },
            VaccineInfo {
                name: "Foot Rot Vaccine".to_string(),
                disease: "Foot Rot".to_string(),
                age_months: 4,
                booster_required: true,
                booster_interval_months: Some(6),
                mandatory: false,
                notes: "Recommended in endemic areas".to_string(),
            },
        ],
    }
}

fn goat_schedule() -> VaccinationSchedule {
    VaccinationSchedule {
        animal_type: AnimalType::Goat,
        vaccines: vec![
            VaccineInfo {
                name: "CDT Vaccine".to_string(),
                disease: "Clostridial diseases".to_string(),
                age_months: 2,
                booster_required: true,
                booster_interval_months: Some(12),
                mandatory: true,
                notes: "Covers multiple clostridial diseases".to_string(),
            },
            VaccineInfo {
                name: "Pneumonia Vaccine".to_string(),
                disease: "Pasteurellosis".to_string(),
                age_months: 3,
                booster_required: true,
                booster_interval_months: Some(12),
                mandatory: false,
                notes: "Recommended for kids".to_string(),
            },
        ],
    }
}

fn poultry_schedule() -> VaccinationSchedule {
    VaccinationSchedule {
        animal_type: AnimalType::Poultry,
        vaccines: vec![
            VaccineInfo {
                name: "Newcastle Disease Vaccine".to_string(),
                disease: "Newcastle Disease".to_string(),
                age_months: 0,
                booster_required: true,
                booster_interval_months: Some(1),
                mandatory: true,
                notes: "First dose at day 7, booster at day 21".to_string(),
            },
            VaccineInfo {
                name: "Infectious Bursal Disease (Gumboro)".to_string(),
                disease: "IBD".to_string(),
                age_months: 0,
                booster_required: true,
                booster_interval_months: Some(1),
                mandatory: true,
                notes: "Critical for immunity".to_string(),
            },
        ],
    }
}

/// Generic supportive-care protocol applied while waiting on a vet
pub(super) fn supportive_care() -> Vec<TreatmentRecommendation> {
    vec![TreatmentRecommendation {
        treatment: "Supportive care".to_string(),
        dosage: "As directed by vet".to_string(),
        duration: "Until symptoms resolve".to_string(),
        frequency: "Daily".to_string(),
        instructions: strings(&[
            "Ensure access to clean water",
            "Provide nutritious feed",
            "Keep animal comfortable and warm",
            "Monitor vital signs",
        ]),
        precautions: strings(&[
            "Isolate if contagious",
            "Wear protective equipment when handling",
        ]),
        requires_prescription: false,
    }]
}
