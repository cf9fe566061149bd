//! Invariant regression suite for the fleet simulation.
//!
//! Each test pins one property of a run that must hold for every seed and
//! every configuration that passes validation.

use fleet_core::idle::{idle_fraction, MAX_IDLE_FRACTION, MIN_IDLE_FRACTION};
use fleet_core::learning::{LearningState, MAX_SUCCESS_PROBABILITY};
use fleet_core::{SimConfig, Simulation};
use proptest::prelude::*;

/// Every series holds exactly one value per simulated day.
#[test]
fn series_length_equals_horizon() {
    let run = Simulation::new(SimConfig::default()).unwrap().run();

    assert_eq!(run.series.compute_harvested.len(), 30);
    assert_eq!(run.series.failure_rates.len(), 30);
    assert_eq!(run.series.empathy_growth.len(), 30);
    assert_eq!(run.series.network_strength.len(), 30);
    assert_eq!(run.days.len(), 30);
}

/// Failures and edge cases are the same event counted twice, bounded by the task count.
#[test]
fn failures_equal_edge_cases() {
    for seed in [0u64, 1, 42, 1234] {
        let config = SimConfig {
            seed,
            ..SimConfig::default()
        };
        let tasks = config.tasks_per_day;
        let run = Simulation::new(config).unwrap().run();

        let mut total = 0u64;
        for day in &run.days {
            assert_eq!(day.failures, day.edge_cases, "seed {} day {}", seed, day.day);
            assert!(day.failures <= tasks);
            total += day.edge_cases as u64;
        }
        assert_eq!(total, run.final_state.edge_cases);
    }
}

/// The ceiling blend only touches intelligence that overshot the ceiling.
#[test]
fn ceiling_blend_only_on_overshoot() {
    let config = SimConfig {
        ceiling: 2.0,
        simulation_days: 20,
        ..SimConfig::default()
    };
    let ceiling = config.ceiling;
    let run = Simulation::new(config).unwrap().run();

    assert!(run.days.iter().any(|d| d.ceiling_applied), "ceiling never reached");
    for day in &run.days {
        if day.pre_ceiling_intelligence > ceiling {
            assert!(day.ceiling_applied);
            let expected = ceiling * 0.99 + day.pre_ceiling_intelligence * 0.01;
            assert_eq!(day.intelligence, expected);
            assert!(day.intelligence <= day.pre_ceiling_intelligence);
        } else {
            assert!(!day.ceiling_applied);
            assert_eq!(day.intelligence, day.pre_ceiling_intelligence);
        }
    }
}

/// Intelligence and empathy never fall during a task loop.
#[test]
fn task_loop_is_monotonic() {
    let mut state = LearningState::new(1.0, 1.0, 8.0);
    let mut draws = 0.0f64;
    for _ in 0..2_000 {
        // deterministic sweep over [0, 1)
        draws = (draws + 0.618_033_988_75) % 1.0;
        let before = (state.intelligence, state.empathy);
        state.apply_task(draws);
        assert!(state.intelligence > before.0);
        assert!(state.empathy >= before.1);
    }
}

/// Intelligence entering a day is never below what the previous day left behind
/// unless the ceiling blend fired.
#[test]
fn day_start_matches_previous_day_end() {
    let run = Simulation::new(SimConfig::default()).unwrap().run();
    let mut previous = 1.0;
    for day in &run.days {
        assert!(day.pre_ceiling_intelligence >= previous);
        previous = day.intelligence;
    }
}

proptest! {
    #[test]
    fn idle_fraction_always_clamped(
        hour in 0u32..24,
        baseline in 0.0f64..2.0,
        noise in -50.0f64..50.0,
    ) {
        let f = idle_fraction(hour, 24, baseline, noise);
        prop_assert!(f >= MIN_IDLE_FRACTION && f <= MAX_IDLE_FRACTION);
    }

    #[test]
    fn success_probability_never_exceeds_cap(
        intelligence in 0.0f64..1_000.0,
        empathy in 0.0f64..100.0,
    ) {
        let state = LearningState::new(intelligence, empathy, 8.0);
        prop_assert!(state.success_probability() <= MAX_SUCCESS_PROBABILITY);
    }
}
