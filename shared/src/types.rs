//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Severity tier for alerts and diagnoses, totally ordered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Severity {
    /// Whether the severity calls for farmer action
    pub fn requires_action(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

/// Supported languages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Kyrgyz,
    Russian,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kyrgyz => "ky",
            Language::Russian => "ru",
            Language::English => "en",
        }
    }
}
