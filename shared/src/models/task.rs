//! Crop task models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timed agronomic task recommended for a field.
///
/// Immutable once created; completion is tracked by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropTask {
    pub id: Uuid,
    pub field_id: Uuid,
    pub title: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub due_at: DateTime<Utc>,
    pub source: TaskSource,
    pub created_at: DateTime<Utc>,
}

/// Categories of agronomic tasks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Irrigation,
    Fertilization,
    PestControl,
    Weeding,
    Harvesting,
    Other,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::Irrigation => write!(f, "irrigation"),
            TaskType::Fertilization => write!(f, "fertilization"),
            TaskType::PestControl => write!(f, "pest_control"),
            TaskType::Weeding => write!(f, "weeding"),
            TaskType::Harvesting => write!(f, "harvesting"),
            TaskType::Other => write!(f, "other"),
        }
    }
}

/// Task priority, totally ordered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Originating subsystem of a task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
    Ai,
    Manual,
    WeatherAlert,
}
