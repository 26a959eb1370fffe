//! Farm advisory decision engine
//!
//! Deterministic rule evaluation for crop and livestock advisory: given a
//! field snapshot (optionally with weather) or a livestock case, the
//! services here produce prioritized tasks, risk alerts, irrigation
//! schedules, and triage verdicts.
//!
//! Every operation is a synchronous pure function of its inputs, the
//! static [`knowledge::KnowledgeBase`], and the injected
//! [`clock::Clock`]/[`clock::IdSource`]. Persistence, networking, and UI
//! belong to the surrounding application layers.

pub mod clock;
pub mod config;
pub mod demo;
pub mod error;
pub mod knowledge;
pub mod services;

pub use clock::{Clock, IdSource, SystemClock, UuidSource};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use knowledge::KnowledgeBase;
pub use services::{AdvisorService, DiagnosisService, IrrigationService, TriageService};
