use serde::{Deserialize, Serialize};

/// The four per-day series recorded by a run. Append-only; every push adds
/// exactly one value to each series so they always share a length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Compute harvested per day, in millions of units
    pub compute_harvested: Vec<f64>,
    pub failure_rates: Vec<f64>,
    pub empathy_growth: Vec<f64>,
    pub network_strength: Vec<f64>,
}

impl TimeSeries {
    pub fn with_capacity(days: usize) -> Self {
        Self {
            compute_harvested: Vec::with_capacity(days),
            failure_rates: Vec::with_capacity(days),
            empathy_growth: Vec::with_capacity(days),
            network_strength: Vec::with_capacity(days),
        }
    }

    pub fn push(&mut self, compute_millions: f64, failure_rate: f64, empathy: f64, strength: f64) {
        self.compute_harvested.push(compute_millions);
        self.failure_rates.push(failure_rate);
        self.empathy_growth.push(empathy);
        self.network_strength.push(strength);
    }

    /// Number of recorded days
    pub fn len(&self) -> usize {
        self.compute_harvested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compute_harvested.is_empty()
    }

    pub fn total_compute(&self) -> f64 {
        self.compute_harvested.iter().sum()
    }

    /// Mean failure rate over the last `window` days (fewer if the run is shorter).
    pub fn trailing_failure_rate(&self, window: usize) -> Option<f64> {
        trailing_mean(&self.failure_rates, window)
    }
}

/// Mean of the last `window` values, `None` for an empty slice or zero window.
pub fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    let take = window.min(values.len());
    if take == 0 {
        return None;
    }
    let tail = &values[values.len() - take..];
    Some(tail.iter().sum::<f64>() / take as f64)
}
