//! Tests for the irrigation scheduler
//!
//! Verifies the water requirement formula, the next-irrigation date, and
//! the event schedule over the planning horizon.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use farm_advisory_engine::clock::FixedClock;
use farm_advisory_engine::services::irrigation_events;
use farm_advisory_engine::{Config, IrrigationService};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{FieldSnapshot, IrrigationFrequency, IrrigationMethod, WeatherObservation};
use uuid::Uuid;

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn scheduler_at(now: DateTime<Utc>) -> IrrigationService {
    IrrigationService::new(Config::default(), Arc::new(FixedClock(now)))
}

fn field(size: &str) -> FieldSnapshot {
    FieldSnapshot {
        id: Uuid::new_v4(),
        crop_type: "maize".to_string(),
        size_hectares: dec(size),
        soil_type: None,
        planting_date: None,
        growth_stage: None,
    }
}

fn weather(rainfall: &str) -> WeatherObservation {
    WeatherObservation {
        temperature_celsius: dec("22.0"),
        humidity_percent: 45,
        rainfall_mm: dec(rainfall),
        wind_kph: dec("8.0"),
        forecast: Vec::new(),
    }
}

// =============================================================================
// Water Requirement Tests
// =============================================================================

mod water_requirement {
    use super::*;

    #[test]
    fn wet_week_uses_base_rate() {
        let schedule = scheduler_at(noon())
            .schedule(&field("2.0"), Some(&weather("10.0")))
            .unwrap();
        // 2.0 ha x 25.0 mm
        assert_eq!(schedule.water_amount_mm, dec("50.0"));
    }

    #[test]
    fn dry_spell_applies_multiplier() {
        let schedule = scheduler_at(noon())
            .schedule(&field("2.0"), Some(&weather("1.0")))
            .unwrap();
        // 2.0 ha x 25.0 mm x 1.5
        assert_eq!(schedule.water_amount_mm, dec("75.0"));
    }

    #[test]
    fn missing_weather_is_treated_as_dry() {
        let schedule = scheduler_at(noon()).schedule(&field("2.0"), None).unwrap();
        assert_eq!(schedule.water_amount_mm, dec("75.0"));
        assert_eq!(schedule.next_irrigation, noon() + Duration::days(1));
    }

    #[test]
    fn rejects_non_positive_field_size() {
        let err = scheduler_at(noon())
            .schedule(&field("0.0"), None)
            .unwrap_err();
        assert_eq!(err.field(), Some("size_hectares"));
    }
}

// =============================================================================
// Schedule Tests
// =============================================================================

mod schedule {
    use super::*;

    #[test]
    fn dry_spell_schedules_next_day() {
        let schedule = scheduler_at(noon())
            .schedule(&field("1.0"), Some(&weather("1.0")))
            .unwrap();
        assert_eq!(schedule.next_irrigation, noon() + Duration::days(1));
    }

    #[test]
    fn wet_week_schedules_in_three_days() {
        let schedule = scheduler_at(noon())
            .schedule(&field("1.0"), Some(&weather("10.0")))
            .unwrap();
        assert_eq!(schedule.next_irrigation, noon() + Duration::days(3));
    }

    #[test]
    fn defaults_to_drip_every_three_days() {
        let schedule = scheduler_at(noon()).schedule(&field("1.0"), None).unwrap();
        assert_eq!(schedule.frequency, IrrigationFrequency::EveryThreeDays);
        assert_eq!(schedule.method, IrrigationMethod::Drip);
    }

    #[test]
    fn events_cover_the_horizon_every_three_days() {
        let now = noon();
        let schedule = scheduler_at(now)
            .schedule(&field("2.0"), Some(&weather("1.0")))
            .unwrap();

        assert_eq!(schedule.events.len(), 3); // days 0, 3, 6
        for (i, event) in schedule.events.iter().enumerate() {
            assert_eq!(event.date, now + Duration::days(3 * i as i64));
            assert_eq!(event.water_amount_mm, schedule.water_amount_mm);
            assert_eq!(event.duration_minutes, 60);
        }
    }

    #[test]
    fn event_sequence_is_restartable() {
        let now = noon();
        let first: Vec<_> = irrigation_events(now, dec("50.0"), 7, 3, 60).collect();
        let second: Vec<_> = irrigation_events(now, dec("50.0"), 7, 3, 60).collect();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn size_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=5000).prop_map(|n| Decimal::new(n, 2)) // 0.01 to 50.00 ha
}

fn rainfall_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=600).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 60.0 mm
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Water amount is linear in field size for fixed weather
    #[test]
    fn prop_water_amount_linear_in_size(
        size in size_strategy(),
        rainfall in rainfall_strategy(),
    ) {
        let scheduler = scheduler_at(noon());
        let observation = weather(&rainfall.to_string());

        let single = scheduler
            .schedule(&field(&size.to_string()), Some(&observation))
            .unwrap();
        let doubled = scheduler
            .schedule(&field(&(size * Decimal::from(2)).to_string()), Some(&observation))
            .unwrap();

        prop_assert_eq!(
            doubled.water_amount_mm,
            single.water_amount_mm * Decimal::from(2)
        );
    }

    /// The schedule always carries at least one event and starts today
    #[test]
    fn prop_schedule_never_empty(rainfall in rainfall_strategy()) {
        let now = noon();
        let schedule = scheduler_at(now)
            .schedule(&field("1.5"), Some(&weather(&rainfall.to_string())))
            .unwrap();

        prop_assert!(!schedule.events.is_empty());
        prop_assert_eq!(schedule.events[0].date, now);
    }
}
