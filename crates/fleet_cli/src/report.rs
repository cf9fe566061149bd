//! Human-readable stdout report: banner, milestone lines, closing summary.

use fleet_core::{DayReport, SimConfig, Summary};
use std::fmt::Write;

pub const PLOT_SAVED_MESSAGE: &str = "Plot saved — visual proof the framework works";

/// Insert `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to the nearest integer and group thousands. Negative and non-finite
/// values are printed as-is.
pub fn format_rounded(value: f64) -> String {
    if value.is_finite() && value >= 0.0 {
        group_thousands(value.round() as u64)
    } else {
        format!("{:.0}", value)
    }
}

pub fn banner(config: &SimConfig) -> String {
    format!(
        "=== Tesla Fleet Empathy Engine Simulation Started ===\n\
         Fleet: {} Teslas | Downtime Asset: {:.1}% | Flame Steady Mode: ON\n\n",
        group_thousands(config.fleet_size),
        config.avg_idle_fraction * 100.0
    )
}

pub fn progress_line(day: &DayReport) -> String {
    format!(
        "Day {:2}: Compute = {:6.1}M units | Fail Rate = {:.1}% | Intell = {:.2} | Empathy = {:.2} | Strength = {:.1} | Edge cases = {}",
        day.day,
        day.compute_millions,
        day.failure_rate * 100.0,
        day.intelligence,
        day.empathy,
        day.strength,
        day.edge_cases
    )
}

pub fn summary_block(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "\n=== Simulation Complete - Flame Steady ===");
    let _ = writeln!(
        out,
        "Final Intelligence Level: {:.2} (capped humbly)",
        summary.final_intelligence
    );
    let _ = writeln!(
        out,
        "Final Empathy Engine Strength: {:.2}",
        summary.final_empathy
    );
    let _ = writeln!(
        out,
        "Total Compute Harvested: {} million units",
        format_rounded(summary.total_compute_millions)
    );
    let _ = writeln!(
        out,
        "Total Edge Cases Learned From: {} (system grew stronger precisely because of them)",
        summary.total_edge_cases
    );
    let _ = writeln!(
        out,
        "Average Failure Rate Drop: from ~{:.0}% → {:.1}% (proof of learning)",
        summary.baseline_failure_rate * 100.0,
        summary.recent_failure_rate * 100.0
    );
    let _ = writeln!(
        out,
        "Overall Network Soul-Strength: {:.1}x initial",
        summary.final_strength
    );
    out
}
