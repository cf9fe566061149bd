use anyhow::{Context, Result};
use csv::Writer;
use fleet_core::{Summary, TimeSeries};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SeriesRow {
    day: usize,
    compute_millions: f64,
    failure_rate: f64,
    empathy: f64,
    strength: f64,
}

/// One row per day, 1-based, with a header row.
pub fn write_series_csv(series: &TimeSeries, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    for i in 0..series.len() {
        writer.serialize(SeriesRow {
            day: i + 1,
            compute_millions: series.compute_harvested[i],
            failure_rate: series.failure_rates[i],
            empathy: series.empathy_growth[i],
            strength: series.network_strength[i],
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_json(summary: &Summary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json).with_context(|| format!("Failed to write summary: {:?}", path))?;
    Ok(())
}
