//! Error handling for the Farm Advisory Platform
//!
//! Provides consistent error values in Russian and English

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A caller-supplied value violated the input contract
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ru: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl AppError {
    /// Validation failure naming the offending field
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        message_ru: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
            message_ru: message_ru.into(),
        }
    }

    /// The field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            AppError::Configuration(_) => None,
        }
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
