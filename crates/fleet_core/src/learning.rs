//! Learning rule for the empathy engine.
//!
//! Failures move the state faster than successes: a failed task raises
//! intelligence in proportion to empathy and raises empathy itself, while a
//! success only adds a small fixed increment.

use serde::{Deserialize, Serialize};

/// Hard cap on the per-task success probability
pub const MAX_SUCCESS_PROBABILITY: f64 = 0.98;

/// Half-saturation constant of the intelligence term
const INTELLIGENCE_HALF_SATURATION: f64 = 5.0;

/// Intelligence gained per failure, scaled by empathy
const FAILURE_INTELLIGENCE_RATE: f64 = 0.015;

/// Empathy gained per failure
const FAILURE_EMPATHY_STEP: f64 = 0.008;

/// Intelligence gained per success
const SUCCESS_INTELLIGENCE_STEP: f64 = 0.002;

/// Weights of the daily ceiling blend
const CEILING_WEIGHT: f64 = 0.99;
const OVERSHOOT_WEIGHT: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskOutcome {
    Success,
    /// A failed task; every failure counts as a learned edge case.
    Failure,
}

/// Mutable learner state carried across the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningState {
    pub intelligence: f64,
    /// Success-rate multiplier
    pub empathy: f64,
    pub ceiling: f64,
    /// Failures absorbed since the start of the run
    pub edge_cases: u64,
}

impl LearningState {
    pub fn new(intelligence: f64, empathy: f64, ceiling: f64) -> Self {
        Self {
            intelligence,
            empathy,
            ceiling,
            edge_cases: 0,
        }
    }

    /// `min(0.98, intelligence / (intelligence + 5) * empathy)`
    pub fn success_probability(&self) -> f64 {
        let p = self.intelligence / (self.intelligence + INTELLIGENCE_HALF_SATURATION) * self.empathy;
        p.min(MAX_SUCCESS_PROBABILITY)
    }

    /// Resolve one task against a uniform `draw` in `[0, 1)`.
    ///
    /// The task fails when `draw` exceeds the success probability.
    pub fn apply_task(&mut self, draw: f64) -> TaskOutcome {
        if draw > self.success_probability() {
            self.intelligence += FAILURE_INTELLIGENCE_RATE * self.empathy;
            self.empathy += FAILURE_EMPATHY_STEP;
            self.edge_cases += 1;
            TaskOutcome::Failure
        } else {
            self.intelligence += SUCCESS_INTELLIGENCE_STEP;
            TaskOutcome::Success
        }
    }

    /// Blend intelligence back toward the ceiling once it has passed it.
    ///
    /// `ceiling * 0.99 + intelligence * 0.01`. This is a soft pull applied once
    /// per day, not a clip: repeated days approach the ceiling geometrically.
    /// Returns whether the blend fired.
    pub fn apply_ceiling(&mut self) -> bool {
        if self.intelligence > self.ceiling {
            self.intelligence = self.ceiling * CEILING_WEIGHT + self.intelligence * OVERSHOOT_WEIGHT;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_success_probability() {
        let state = LearningState::new(1.0, 1.0, 8.0);
        assert!((state.success_probability() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_success_probability_capped() {
        let state = LearningState::new(1_000.0, 5.0, 8.0);
        assert_eq!(state.success_probability(), MAX_SUCCESS_PROBABILITY);
    }

    #[test]
    fn test_failure_branch_uses_pre_update_empathy() {
        let mut state = LearningState::new(1.0, 2.0, 8.0);
        let outcome = state.apply_task(0.99);

        assert_eq!(outcome, TaskOutcome::Failure);
        assert!((state.intelligence - 1.03).abs() < 1e-12);
        assert!((state.empathy - 2.008).abs() < 1e-12);
        assert_eq!(state.edge_cases, 1);
    }

    #[test]
    fn test_success_branch() {
        let mut state = LearningState::new(1.0, 1.0, 8.0);
        let outcome = state.apply_task(0.0);

        assert_eq!(outcome, TaskOutcome::Success);
        assert!((state.intelligence - 1.002).abs() < 1e-12);
        assert_eq!(state.empathy, 1.0);
        assert_eq!(state.edge_cases, 0);
    }

    #[test]
    fn test_draw_equal_to_probability_succeeds() {
        let mut state = LearningState::new(5.0, 1.0, 8.0);
        let p = state.success_probability();
        assert_eq!(state.apply_task(p), TaskOutcome::Success);
    }

    #[test]
    fn test_ceiling_blend_is_soft() {
        let mut state = LearningState::new(10.0, 1.0, 8.0);
        assert!(state.apply_ceiling());
        // 8 * 0.99 + 10 * 0.01
        assert!((state.intelligence - 8.02).abs() < 1e-12);
        assert!(state.intelligence > state.ceiling);
    }

    #[test]
    fn test_ceiling_untouched_below_cap() {
        let mut state = LearningState::new(7.5, 1.0, 8.0);
        assert!(!state.apply_ceiling());
        assert_eq!(state.intelligence, 7.5);

        let mut at_cap = LearningState::new(8.0, 1.0, 8.0);
        assert!(!at_cap.apply_ceiling());
        assert_eq!(at_cap.intelligence, 8.0);
    }
}
