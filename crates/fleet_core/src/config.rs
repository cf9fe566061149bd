use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

use crate::error::SimError;

/// Parameters of one simulation run. Fixed at start, immutable for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Args))]
#[serde(default)]
pub struct SimConfig {
    /// Number of vehicles in the fleet
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10_000))]
    pub fleet_size: u64,

    /// Length of the simulated horizon in days
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 30))]
    pub simulation_days: u32,

    /// Hours per simulated day (also the period of the usage cycle)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 24))]
    pub hours_per_day: u32,

    /// Baseline fraction of the fleet sitting idle
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 0.65))]
    pub avg_idle_fraction: f64,

    /// Compute units produced by one idle vehicle per hour
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 5.0))]
    pub compute_per_unit_hour: f64,

    /// Tasks attempted per day
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 200))]
    pub tasks_per_day: u32,

    /// Nominal starting failure rate, used only as a report label
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 0.25))]
    pub base_failure_threshold: f64,

    /// Starting intelligence level
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 1.0))]
    pub initial_intelligence: f64,

    /// Starting empathy (success-rate multiplier)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 1.0))]
    pub initial_empathy: f64,

    /// Intelligence level above which the daily ceiling blend applies
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 8.0))]
    pub ceiling: f64,

    /// RNG seed
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 42))]
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fleet_size: 10_000,
            simulation_days: 30,
            hours_per_day: 24,
            avg_idle_fraction: 0.65,
            compute_per_unit_hour: 5.0,
            tasks_per_day: 200,
            base_failure_threshold: 0.25,
            initial_intelligence: 1.0,
            initial_empathy: 1.0,
            ceiling: 8.0,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Reject configurations that would divide by zero or produce an empty run.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.simulation_days == 0 {
            return Err(SimError::invalid("simulation_days", "must be at least 1"));
        }
        if self.hours_per_day == 0 {
            return Err(SimError::invalid("hours_per_day", "must be at least 1"));
        }
        if self.tasks_per_day == 0 {
            return Err(SimError::invalid("tasks_per_day", "must be at least 1"));
        }

        let non_negative = [
            ("avg_idle_fraction", self.avg_idle_fraction),
            ("compute_per_unit_hour", self.compute_per_unit_hour),
            ("base_failure_threshold", self.base_failure_threshold),
            ("initial_intelligence", self.initial_intelligence),
            ("initial_empathy", self.initial_empathy),
            ("ceiling", self.ceiling),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::invalid(
                    field,
                    format!("must be finite and non-negative, got {value}"),
                ));
            }
        }

        Ok(())
    }
}
