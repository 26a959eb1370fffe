//! Tests for crop task generation
//!
//! Verifies the four advisory rules fire independently, honor the rule
//! thresholds, and stay deterministic under a fixed clock.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use farm_advisory_engine::clock::{FixedClock, SequentialIdSource};
use farm_advisory_engine::{AdvisorService, Config, KnowledgeBase};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{FieldSnapshot, TaskPriority, TaskSource, TaskType, WeatherObservation};
use uuid::Uuid;

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn july_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
}

fn january_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn advisor_at(now: DateTime<Utc>) -> AdvisorService {
    AdvisorService::new(
        Config::default(),
        Arc::new(KnowledgeBase::load()),
        Arc::new(FixedClock(now)),
        Arc::new(SequentialIdSource::new()),
    )
}

fn field() -> FieldSnapshot {
    FieldSnapshot {
        id: Uuid::new_v4(),
        crop_type: "wheat".to_string(),
        size_hectares: dec("2.5"),
        soil_type: None,
        planting_date: None,
        growth_stage: None,
    }
}

fn weather(rainfall: &str) -> WeatherObservation {
    WeatherObservation {
        temperature_celsius: dec("20.0"),
        humidity_percent: 50,
        rainfall_mm: dec(rainfall),
        wind_kph: dec("10.0"),
        forecast: Vec::new(),
    }
}

// =============================================================================
// Irrigation Rule Tests
// =============================================================================

mod irrigation_rule {
    use super::*;

    #[test]
    fn very_low_rainfall_fires_high_priority_irrigation() {
        let now = july_noon();
        let advisor = advisor_at(now);
        let tasks = advisor
            .generate_tasks(&field(), Some(&weather("1.0")))
            .unwrap();

        let task = tasks
            .iter()
            .find(|t| t.task_type == TaskType::Irrigation)
            .expect("irrigation task");
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.due_at, now + Duration::days(1));
        assert_eq!(task.source, TaskSource::WeatherAlert);
        assert_eq!(task.created_at, now);
    }

    #[test]
    fn moderate_low_rainfall_fires_medium_priority() {
        let advisor = advisor_at(july_noon());
        let tasks = advisor
            .generate_tasks(&field(), Some(&weather("3.0")))
            .unwrap();

        let task = tasks
            .iter()
            .find(|t| t.task_type == TaskType::Irrigation)
            .expect("irrigation task");
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn adequate_rainfall_suppresses_irrigation() {
        let advisor = advisor_at(july_noon());
        let tasks = advisor
            .generate_tasks(&field(), Some(&weather("7.0")))
            .unwrap();
        assert!(!tasks.iter().any(|t| t.task_type == TaskType::Irrigation));
    }

    #[test]
    fn missing_weather_disables_irrigation_rule() {
        let advisor = advisor_at(july_noon());
        let tasks = advisor.generate_tasks(&field(), None).unwrap();
        assert!(!tasks.iter().any(|t| t.task_type == TaskType::Irrigation));
        // Weather-independent rules still fire
        assert!(tasks.iter().any(|t| t.task_type == TaskType::Weeding));
    }
}

// =============================================================================
// Fertilization / Pest / Weeding Rule Tests
// =============================================================================

mod schedule_rules {
    use super::*;

    #[test]
    fn fertilization_fires_after_thirty_days() {
        let now = july_noon();
        let advisor = advisor_at(now);
        let mut snapshot = field();
        snapshot.planting_date = Some(now.date_naive() - Duration::days(45));

        let tasks = advisor.generate_tasks(&snapshot, None).unwrap();
        let task = tasks
            .iter()
            .find(|t| t.task_type == TaskType::Fertilization)
            .expect("fertilization task");
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.due_at, now + Duration::days(7));
        assert_eq!(task.source, TaskSource::Ai);
    }

    #[test]
    fn fertilization_skipped_for_young_crop() {
        let now = july_noon();
        let advisor = advisor_at(now);
        let mut snapshot = field();
        snapshot.planting_date = Some(now.date_naive() - Duration::days(10));

        let tasks = advisor.generate_tasks(&snapshot, None).unwrap();
        assert!(!tasks.iter().any(|t| t.task_type == TaskType::Fertilization));
    }

    #[test]
    fn fertilization_skipped_without_planting_date() {
        let advisor = advisor_at(july_noon());
        let tasks = advisor.generate_tasks(&field(), None).unwrap();
        assert!(!tasks.iter().any(|t| t.task_type == TaskType::Fertilization));
    }

    #[test]
    fn pest_inspection_fires_in_growing_season() {
        let now = july_noon();
        let advisor = advisor_at(now);
        let tasks = advisor.generate_tasks(&field(), None).unwrap();

        let task = tasks
            .iter()
            .find(|t| t.task_type == TaskType::PestControl)
            .expect("pest task");
        assert_eq!(task.due_at, now + Duration::days(3));
    }

    #[test]
    fn pest_inspection_skipped_off_season() {
        let advisor = advisor_at(january_noon());
        let tasks = advisor.generate_tasks(&field(), None).unwrap();
        assert!(!tasks.iter().any(|t| t.task_type == TaskType::PestControl));
    }

    #[test]
    fn weeding_always_fires() {
        let now = january_noon();
        let advisor = advisor_at(now);
        let tasks = advisor.generate_tasks(&field(), None).unwrap();

        let task = tasks
            .iter()
            .find(|t| t.task_type == TaskType::Weeding)
            .expect("weeding task");
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.due_at, now + Duration::days(5));
    }
}

// =============================================================================
// Determinism & Validation Tests
// =============================================================================

mod determinism {
    use super::*;

    #[test]
    fn identical_runs_are_equal_up_to_ids() {
        let now = july_noon();
        let snapshot = FieldSnapshot {
            id: Uuid::from_u128(42),
            crop_type: "potato".to_string(),
            size_hectares: dec("1.0"),
            soil_type: None,
            planting_date: Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            growth_stage: None,
        };
        let observation = weather("1.0");

        let first = advisor_at(now)
            .generate_tasks(&snapshot, Some(&observation))
            .unwrap();
        let second = advisor_at(now)
            .generate_tasks(&snapshot, Some(&observation))
            .unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
            assert_eq!(a.task_type, b.task_type);
            assert_eq!(a.priority, b.priority);
            assert_eq!(a.due_at, b.due_at);
            assert_eq!(a.source, b.source);
            assert_eq!(a.created_at, b.created_at);
        }
    }

    #[test]
    fn rejects_non_positive_field_size() {
        let advisor = advisor_at(july_noon());
        let mut snapshot = field();
        snapshot.size_hectares = Decimal::ZERO;

        let err = advisor.generate_tasks(&snapshot, None).unwrap_err();
        assert_eq!(err.field(), Some("size_hectares"));
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn rainfall_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=600).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 60.0 mm
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Weeding fires on every run; the task list is never empty and
    /// never exceeds the four rules
    #[test]
    fn prop_task_count_bounds(rainfall in rainfall_strategy()) {
        let advisor = advisor_at(july_noon());
        let observation = WeatherObservation {
            temperature_celsius: dec("20.0"),
            humidity_percent: 50,
            rainfall_mm: rainfall,
            wind_kph: dec("10.0"),
            forecast: Vec::new(),
        };
        let tasks = advisor.generate_tasks(&field(), Some(&observation)).unwrap();

        prop_assert!(!tasks.is_empty());
        prop_assert!(tasks.len() <= 4);
        prop_assert!(tasks.iter().any(|t| t.task_type == TaskType::Weeding));
    }

    /// The irrigation rule fires exactly when rainfall is below the
    /// threshold
    #[test]
    fn prop_irrigation_gated_on_rainfall(rainfall in rainfall_strategy()) {
        let advisor = advisor_at(july_noon());
        let observation = WeatherObservation {
            temperature_celsius: dec("20.0"),
            humidity_percent: 50,
            rainfall_mm: rainfall,
            wind_kph: dec("10.0"),
            forecast: Vec::new(),
        };
        let tasks = advisor.generate_tasks(&field(), Some(&observation)).unwrap();

        let fired = tasks.iter().any(|t| t.task_type == TaskType::Irrigation);
        prop_assert_eq!(fired, rainfall < dec("5.0"));
    }
}
