//! Advisory services for the Farm Advisory Platform

pub mod advisor;
pub mod diagnosis;
pub mod irrigation;
pub mod triage;

pub use advisor::AdvisorService;
pub use diagnosis::DiagnosisService;
pub use irrigation::{irrigation_events, IrrigationService};
pub use triage::TriageService;
