//! 2x2 dashboard of the four daily series, rendered to a PNG.

use fleet_core::TimeSeries;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const SUPTITLE: &str = "Tesla Fleet Empathy Engine Simulation";
const MOTTO: &str =
    "\"Downtime Becomes an Asset • Smarter Together • Never Too Smart • Flame Steady\"";

/// Reference height the font and stroke sizes below are tuned for.
const REFERENCE_HEIGHT: f64 = 1000.0;

pub struct Panel<'a> {
    pub title: &'static str,
    pub values: &'a [f64],
    pub color: RGBColor,
}

/// Panels in row-major order: compute, failure rate, empathy, strength.
pub fn panels(series: &TimeSeries) -> [Panel<'_>; 4] {
    [
        Panel {
            title: "Daily Compute Harvested from Idle Fleet (M units)",
            values: &series.compute_harvested,
            color: RGBColor(0x00, 0xff, 0x9d),
        },
        Panel {
            title: "Failure Rate Over Time (Edge Cases → Growth)",
            values: &series.failure_rates,
            color: RGBColor(0xff, 0x2a, 0x6d),
        },
        Panel {
            title: "Empathy Engine Growth (The Soul)",
            values: &series.empathy_growth,
            color: RGBColor(0xff, 0xcc, 0x00),
        },
        Panel {
            title: "Overall Network Strength (Intelligence × Empathy × Compute)",
            values: &series.network_strength,
            color: RGBColor(0x7b, 0x2c, 0xbf),
        },
    ]
}

/// Y range covering `values` with 10% padding; `0..1` when nothing finite.
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &y in values {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return (0.0, 1.0);
    }
    let range = y_max - y_min;
    let pad = if range > 1e-9 {
        0.1 * range
    } else {
        0.1 * y_max.abs().max(1.0)
    };
    (y_min - pad, y_max + pad)
}

/// Render the dashboard to `out_path`, overwriting any existing file.
pub fn render_dashboard(
    series: &TimeSeries,
    size: (u32, u32),
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let scale = (size.1 as f64 / REFERENCE_HEIGHT).max(0.5);
    let font = |pt: f64| pt * scale;
    let px = |v: f64| (v * scale).round() as u32;

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let body = root
        .titled(
            SUPTITLE,
            ("sans-serif", font(28.0)).into_font().style(FontStyle::Bold),
        )?
        .titled(
            MOTTO,
            ("sans-serif", font(22.0)).into_font().style(FontStyle::Bold),
        )?;

    let areas = body.split_evenly((2, 2));
    for (area, panel) in areas.iter().zip(panels(series).iter()) {
        let (y_lo, y_hi) = value_range(panel.values);
        let x_max = panel.values.len().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title, ("sans-serif", font(18.0)))
            .margin(px(12.0))
            .x_label_area_size(px(35.0))
            .y_label_area_size(px(60.0))
            .build_cartesian_2d(0.0f64..x_max, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .label_style(("sans-serif", font(12.0)))
            .x_desc("day")
            .draw()?;

        chart.draw_series(LineSeries::new(
            panel
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v)),
            panel.color.stroke_width(px(3.0).max(1)),
        ))?;
    }

    root.present()?;
    Ok(())
}
