use serde::{Deserialize, Serialize};

use crate::simulation::SimulationRun;

/// Days averaged for the closing failure-rate figure
pub const RECENT_WINDOW: usize = 5;

/// End-of-run figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub days: usize,
    pub final_intelligence: f64,
    pub final_empathy: f64,
    /// Sum of the daily compute series, in millions of units
    pub total_compute_millions: f64,
    pub total_edge_cases: u64,
    /// Mean failure rate over the last [`RECENT_WINDOW`] days
    pub recent_failure_rate: f64,
    pub final_strength: f64,
    /// Nominal starting failure rate the report compares against
    pub baseline_failure_rate: f64,
}

impl Summary {
    pub fn from_run(run: &SimulationRun) -> Self {
        let series = &run.series;
        Self {
            days: series.len(),
            final_intelligence: run.final_state.intelligence,
            final_empathy: run.final_state.empathy,
            total_compute_millions: series.total_compute(),
            total_edge_cases: run.final_state.edge_cases,
            recent_failure_rate: series
                .trailing_failure_rate(RECENT_WINDOW)
                .unwrap_or(f64::NAN),
            final_strength: series.network_strength.last().copied().unwrap_or(f64::NAN),
            baseline_failure_rate: run.config.base_failure_threshold,
        }
    }
}
