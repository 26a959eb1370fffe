//! Weather data models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A weather observation handed to the engine by the weather provider.
///
/// Optional everywhere it is consumed: generators treat a missing
/// observation as "no adjustment", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub rainfall_mm: Decimal,
    pub wind_kph: Decimal,
    pub forecast: Vec<DailyForecast>,
}

/// Daily weather forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_min_celsius: Decimal,
    pub temp_max_celsius: Decimal,
    pub rainfall_mm: Decimal,
    pub conditions: String,
}
