//! Validation utilities for the Farm Advisory Platform
//!
//! Boundary checks for caller-supplied values. Out-of-range numbers are a
//! caller contract violation and are rejected here rather than producing a
//! nonsensical tier downstream.

use rust_decimal::Decimal;

// ============================================================================
// Advisory Input Validations
// ============================================================================

/// Validate a classifier confidence score is in [0, 1]
pub fn validate_confidence(confidence: f32) -> Result<(), &'static str> {
    if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
        return Err("Confidence must be between 0.0 and 1.0");
    }
    Ok(())
}

/// Validate a farmer-reported severity is on the 1-10 scale
pub fn validate_reported_severity(severity: i32) -> Result<(), &'static str> {
    if !(1..=10).contains(&severity) {
        return Err("Reported severity must be between 1 and 10");
    }
    Ok(())
}

/// Validate a field size is positive
pub fn validate_field_size(size_hectares: Decimal) -> Result<(), &'static str> {
    if size_hectares <= Decimal::ZERO {
        return Err("Field size must be positive");
    }
    Ok(())
}

/// Validate a humidity percentage
pub fn validate_humidity_percent(humidity: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}
