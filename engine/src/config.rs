//! Configuration for the advisory engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (the published rule thresholds)
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FAP_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Irrigation rule thresholds
    pub irrigation: IrrigationConfig,

    /// Risk alert thresholds
    pub alerts: AlertConfig,

    /// Season windows (month numbers, inclusive)
    pub seasons: SeasonConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IrrigationConfig {
    /// Rainfall below this counts as a dry spell (mm)
    pub low_rainfall_mm: Decimal,

    /// Rainfall below this escalates irrigation priority (mm)
    pub critical_rainfall_mm: Decimal,

    /// Base water requirement per hectare (mm)
    pub base_water_mm_per_hectare: Decimal,

    /// Water multiplier applied during a dry spell
    pub dry_spell_multiplier: Decimal,

    /// Days between scheduled irrigation events
    pub event_interval_days: i64,

    /// Planning horizon for the event schedule (days)
    pub horizon_days: i64,

    /// Duration of a single irrigation event (minutes)
    pub event_duration_minutes: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    /// Temperature below this raises a frost alert (°C)
    pub frost_temp_celsius: Decimal,

    /// Rainfall below this raises a drought alert (mm)
    pub drought_rainfall_mm: Decimal,

    /// Rainfall above this raises a heavy rain alert (mm)
    pub heavy_rain_mm: Decimal,

    /// Wind speed above this raises a wind alert (km/h)
    pub high_wind_kph: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeasonConfig {
    /// First month of the growing season
    pub growing_start_month: u32,

    /// Last month of the growing season
    pub growing_end_month: u32,

    /// First month of peak pest activity
    pub pest_start_month: u32,

    /// Last month of peak pest activity
    pub pest_end_month: u32,
}

impl SeasonConfig {
    /// Whether the given month falls in the growing season
    pub fn is_growing_season(&self, month: u32) -> bool {
        (self.growing_start_month..=self.growing_end_month).contains(&month)
    }

    /// Whether the given month falls in the pest season
    pub fn is_pest_season(&self, month: u32) -> bool {
        (self.pest_start_month..=self.pest_end_month).contains(&month)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FAP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with the published rule thresholds
            .set_default("environment", environment.clone())?
            .set_default("irrigation.low_rainfall_mm", "5.0")?
            .set_default("irrigation.critical_rainfall_mm", "2.0")?
            .set_default("irrigation.base_water_mm_per_hectare", "25.0")?
            .set_default("irrigation.dry_spell_multiplier", "1.5")?
            .set_default("irrigation.event_interval_days", 3)?
            .set_default("irrigation.horizon_days", 7)?
            .set_default("irrigation.event_duration_minutes", 60)?
            .set_default("alerts.frost_temp_celsius", "5.0")?
            .set_default("alerts.drought_rainfall_mm", "10.0")?
            .set_default("alerts.heavy_rain_mm", "50.0")?
            .set_default("alerts.high_wind_kph", "40.0")?
            .set_default("seasons.growing_start_month", 5)?
            .set_default("seasons.growing_end_month", 10)?
            .set_default("seasons.pest_start_month", 6)?
            .set_default("seasons.pest_end_month", 9)?
            // Load environment-specific config file if present
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Environment variable overrides, e.g. FAP_ALERTS__FROST_TEMP_CELSIUS
            .add_source(Environment::with_prefix("FAP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            irrigation: IrrigationConfig {
                low_rainfall_mm: Decimal::new(50, 1),
                critical_rainfall_mm: Decimal::new(20, 1),
                base_water_mm_per_hectare: Decimal::from(25),
                dry_spell_multiplier: Decimal::new(15, 1),
                event_interval_days: 3,
                horizon_days: 7,
                event_duration_minutes: 60,
            },
            alerts: AlertConfig {
                frost_temp_celsius: Decimal::new(50, 1),
                drought_rainfall_mm: Decimal::from(10),
                heavy_rain_mm: Decimal::from(50),
                high_wind_kph: Decimal::from(40),
            },
            seasons: SeasonConfig {
                growing_start_month: 5,
                growing_end_month: 10,
                pest_start_month: 6,
                pest_end_month: 9,
            },
        }
    }
}
