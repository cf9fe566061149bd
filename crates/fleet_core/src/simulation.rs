//! Day-by-day simulation engine.
//!
//! One day = hourly compute accrual, then the task loop, then the ceiling
//! blend and aggregation. All randomness comes from a single ChaCha8 stream
//! seeded from the config, consumed in a fixed order: `hours_per_day` normal
//! draws followed by `tasks_per_day` uniform draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::idle;
use crate::learning::{LearningState, TaskOutcome};
use crate::series::TimeSeries;

/// Progress lines are emitted on day 1 and every `MILESTONE_INTERVAL` days.
pub const MILESTONE_INTERVAL: u32 = 5;

/// Aggregated outcome of one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// 1-based day number
    pub day: u32,
    pub compute_millions: f64,
    pub failures: u32,
    /// Edge cases learned today. Always equal to `failures`.
    pub edge_cases: u32,
    pub failure_rate: f64,
    /// Intelligence at the end of the task loop, before the ceiling blend
    pub pre_ceiling_intelligence: f64,
    pub ceiling_applied: bool,
    pub intelligence: f64,
    pub empathy: f64,
    pub strength: f64,
}

impl DayReport {
    /// Day 1 and every fifth day.
    pub fn is_milestone(&self) -> bool {
        self.day == 1 || self.day % MILESTONE_INTERVAL == 0
    }
}

/// Result of a complete run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    pub config: SimConfig,
    pub series: TimeSeries,
    pub final_state: LearningState,
    pub days: Vec<DayReport>,
}

pub struct Simulation {
    config: SimConfig,
    rng: ChaCha8Rng,
    state: LearningState,
    series: TimeSeries,
    days: Vec<DayReport>,
}

impl Simulation {
    /// Validates `config` and seeds the RNG from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = LearningState::new(
            config.initial_intelligence,
            config.initial_empathy,
            config.ceiling,
        );
        let days = config.simulation_days as usize;

        Ok(Self {
            config,
            rng,
            state,
            series: TimeSeries::with_capacity(days),
            days: Vec::with_capacity(days),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &LearningState {
        &self.state
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Days simulated so far
    pub fn current_day(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.current_day() >= self.config.simulation_days
    }

    /// Advance the simulation by one day and record it.
    pub fn step_day(&mut self) -> DayReport {
        let day = self.current_day() + 1;

        let daily_compute = idle::daily_compute(&self.config, &mut self.rng);

        let mut failures = 0u32;
        let mut edge_cases = 0u32;
        for _ in 0..self.config.tasks_per_day {
            let draw: f64 = self.rng.gen();
            if self.state.apply_task(draw) == TaskOutcome::Failure {
                failures += 1;
                edge_cases += 1;
            }
        }

        let pre_ceiling_intelligence = self.state.intelligence;
        let ceiling_applied = self.state.apply_ceiling();

        let compute_millions = daily_compute / 1_000_000.0;
        let failure_rate = failures as f64 / self.config.tasks_per_day as f64;
        let strength = self.state.intelligence * self.state.empathy * compute_millions / 10.0;

        self.series
            .push(compute_millions, failure_rate, self.state.empathy, strength);

        let report = DayReport {
            day,
            compute_millions,
            failures,
            edge_cases,
            failure_rate,
            pre_ceiling_intelligence,
            ceiling_applied,
            intelligence: self.state.intelligence,
            empathy: self.state.empathy,
            strength,
        };

        debug!(
            day,
            compute_millions,
            failure_rate,
            intelligence = report.intelligence,
            empathy = report.empathy,
            strength,
            ceiling_applied,
            "Day simulated"
        );

        self.days.push(report.clone());
        report
    }

    /// Run the remaining days, handing each report to `on_day` as it completes.
    pub fn run_with<F>(mut self, mut on_day: F) -> SimulationRun
    where
        F: FnMut(&DayReport),
    {
        info!(
            seed = self.config.seed,
            days = self.config.simulation_days,
            fleet_size = self.config.fleet_size,
            "Simulation started"
        );

        while !self.is_finished() {
            let report = self.step_day();
            on_day(&report);
        }

        info!(
            total_edge_cases = self.state.edge_cases,
            final_intelligence = self.state.intelligence,
            final_empathy = self.state.empathy,
            "Simulation finished"
        );

        self.into_run()
    }

    pub fn run(self) -> SimulationRun {
        self.run_with(|_| {})
    }

    /// Snapshot of everything recorded so far.
    pub fn into_run(self) -> SimulationRun {
        SimulationRun {
            config: self.config,
            series: self.series,
            final_state: self.state,
            days: self.days,
        }
    }
}
