//! Livestock triage
//!
//! Maps a reported animal case to an urgency tier, candidate conditions,
//! and care advice. Tiers are evaluated top-down and the first match
//! wins; additional keyword hits never escalate past the tier already
//! reached.

use std::sync::Arc;

use shared::{
    validate_reported_severity, AnimalCase, AnimalType, DiseaseProfile, TreatmentRecommendation,
    TriageResult, Urgency, VaccinationSchedule,
};

use crate::error::{AppError, AppResult};
use crate::knowledge::KnowledgeBase;

/// Symptoms that make a case an emergency regardless of reported severity
const CRITICAL_SYMPTOMS: &[&str] = &[
    "severe bleeding",
    "unable to stand",
    "seizures",
    "difficulty breathing",
    "severe diarrhea",
    "collapse",
    "unresponsive",
    "bloat",
];

const HIGH_URGENCY_SYMPTOMS: &[&str] = &[
    "high fever",
    "not eating",
    "vomiting",
    "limping",
    "eye discharge",
    "rapid breathing",
    "lethargy",
    "blood in urine",
    "blood in stool",
];

/// Service triaging livestock cases against the knowledge base
#[derive(Clone)]
pub struct TriageService {
    kb: Arc<KnowledgeBase>,
}

impl TriageService {
    /// Create a new TriageService instance
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Triage a livestock case into an urgency tier with care advice.
    ///
    /// Symptom matching is case-insensitive substring matching. A
    /// reported severity outside the 1-10 scale is a caller contract
    /// violation.
    pub fn triage(&self, case: &AnimalCase) -> AppResult<TriageResult> {
        validate_reported_severity(case.reported_severity).map_err(|msg| {
            AppError::validation(
                "reported_severity",
                msg,
                "Оценка тяжести должна быть от 1 до 10",
            )
        })?;

        let lowered: Vec<String> = case.symptoms.iter().map(|s| s.to_lowercase()).collect();

        let result = if matches_any(&lowered, CRITICAL_SYMPTOMS) || case.reported_severity >= 9 {
            TriageResult {
                urgency: Urgency::Critical,
                candidate_conditions: strings(&[
                    "Bloat (life-threatening)",
                    "Severe internal injury",
                    "Poisoning",
                    "Heat stroke",
                    "Respiratory failure",
                ]),
                recommendations: strings(&[
                    "EMERGENCY: Contact veterinarian immediately",
                    "Do not wait - this requires urgent professional care",
                    "Keep animal calm and comfortable",
                    "Prepare for immediate transport to vet",
                ]),
                requires_vet: true,
                self_care_advice: Vec::new(),
                warning_signs: strings(&["Condition worsening", "Loss of consciousness"]),
                confidence: 0.85,
            }
        } else if matches_any(&lowered, HIGH_URGENCY_SYMPTOMS) || case.reported_severity >= 7 {
            TriageResult {
                urgency: Urgency::High,
                candidate_conditions: strings(&[
                    "Mastitis",
                    "Pneumonia",
                    "Foot rot",
                    "Digestive infection",
                    "Eye infection",
                ]),
                recommendations: strings(&[
                    "Schedule veterinary visit within 24 hours",
                    "Monitor condition closely",
                    "Document all symptoms and changes",
                    "Isolate from other animals if contagious suspected",
                ]),
                requires_vet: true,
                self_care_advice: self_care_advice(&lowered),
                warning_signs: strings(&[
                    "Symptoms worsening",
                    "New symptoms appearing",
                    "Refusal to eat or drink for 24+ hours",
                ]),
                confidence: 0.75,
            }
        } else if case.reported_severity >= 4 {
            TriageResult {
                urgency: Urgency::Medium,
                candidate_conditions: strings(&[
                    "Parasitic infection",
                    "Mild respiratory infection",
                    "Skin condition",
                    "Nutritional deficiency",
                ]),
                recommendations: strings(&[
                    "Schedule vet visit within 1-2 days",
                    "Monitor symptoms daily",
                    "Try recommended self-care measures",
                    "Contact vet if symptoms worsen",
                ]),
                requires_vet: false,
                self_care_advice: self_care_advice(&lowered),
                warning_signs: strings(&[
                    "Rapid deterioration",
                    "Spreading to other animals",
                    "Not improving after 2-3 days",
                ]),
                confidence: 0.65,
            }
        } else {
            TriageResult {
                urgency: Urgency::Low,
                candidate_conditions: strings(&[
                    "Minor scrape or cut",
                    "Mild digestive upset",
                    "External parasites",
                    "Stress-related behavior",
                ]),
                recommendations: strings(&[
                    "Monitor condition for next few days",
                    "Try home remedies and supportive care",
                    "Schedule routine vet check if not improving",
                    "Document symptoms for vet visit if needed",
                ]),
                requires_vet: false,
                self_care_advice: self_care_advice(&lowered),
                warning_signs: strings(&[
                    "Symptoms persist beyond 1 week",
                    "Animal stops eating",
                    "Behavior changes significantly",
                ]),
                confidence: 0.55,
            }
        };

        tracing::debug!(
            animal = %case.animal_type,
            urgency = %result.urgency,
            requires_vet = result.requires_vet,
            "triaged livestock case"
        );
        Ok(result)
    }

    /// Common diseases for an animal type
    pub fn common_diseases(&self, animal_type: AnimalType) -> &[DiseaseProfile] {
        self.kb.diseases_for(animal_type)
    }

    /// Vaccination schedule for an animal type, if one is published
    pub fn vaccination_schedule(&self, animal_type: AnimalType) -> Option<&VaccinationSchedule> {
        self.kb.vaccination_schedule(animal_type)
    }

    /// Treatment options for a diagnosed condition
    pub fn treatment_recommendations(&self, diagnosis: &str) -> Vec<TreatmentRecommendation> {
        self.kb.treatments_for(diagnosis)
    }
}

fn matches_any(symptoms: &[String], keywords: &[&str]) -> bool {
    symptoms
        .iter()
        .any(|symptom| keywords.iter().any(|kw| symptom.contains(kw)))
}

/// Assemble self-care advice from symptom keywords, falling back to
/// generic comfort and monitoring advice when nothing matched
fn self_care_advice(symptoms: &[String]) -> Vec<String> {
    let mut advice = Vec::new();

    if symptoms.iter().any(|s| s.contains("fever")) {
        advice.push("Provide cool water and shade".to_string());
        advice.push("Use wet towels to cool body temperature".to_string());
    }

    if symptoms.iter().any(|s| s.contains("diarrhea")) {
        advice.push("Ensure access to clean water to prevent dehydration".to_string());
        advice.push("Consider probiotic supplements".to_string());
    }

    if symptoms.iter().any(|s| s.contains("not eating")) {
        advice.push("Offer fresh, palatable feed".to_string());
        advice.push("Try hand feeding small amounts".to_string());
    }

    if advice.is_empty() {
        advice.push("Provide comfortable, clean environment".to_string());
        advice.push("Monitor closely for changes".to_string());
        advice.push("Ensure adequate nutrition and water".to_string());
    }

    advice
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
