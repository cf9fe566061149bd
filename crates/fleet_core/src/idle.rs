//! Idle-compute model.
//!
//! Each hour the share of idle vehicles follows the baseline, modulated by a
//! daily usage sinusoid and one standard-normal sample, then clamped.

use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

use crate::config::SimConfig;

/// Lower bound of the hourly idle fraction.
pub const MIN_IDLE_FRACTION: f64 = 0.3;

/// Upper bound of the hourly idle fraction.
pub const MAX_IDLE_FRACTION: f64 = 0.95;

const CYCLE_OFFSET: f64 = 0.85;
const CYCLE_AMPLITUDE: f64 = 0.3;
const NOISE_SCALE: f64 = 0.1;

/// Idle fraction for `hour` given one standard-normal `noise` sample.
///
/// `hours_per_day` is the period of the usage cycle. The result always lies
/// in `[MIN_IDLE_FRACTION, MAX_IDLE_FRACTION]`, NaN noise included.
pub fn idle_fraction(hour: u32, hours_per_day: u32, baseline: f64, noise: f64) -> f64 {
    let phase = 2.0 * PI * hour as f64 / hours_per_day as f64;
    let raw = baseline * (CYCLE_OFFSET + CYCLE_AMPLITUDE * phase.sin() + NOISE_SCALE * noise);
    // max/min rather than clamp: clamp propagates NaN
    raw.min(MAX_IDLE_FRACTION).max(MIN_IDLE_FRACTION)
}

/// Whole vehicles idle at `fraction`, truncated toward zero.
pub fn idle_units(fleet_size: u64, fraction: f64) -> u64 {
    (fleet_size as f64 * fraction) as u64
}

/// Compute harvested in one hour.
pub fn hourly_compute(fleet_size: u64, fraction: f64, compute_per_unit_hour: f64) -> f64 {
    idle_units(fleet_size, fraction) as f64 * compute_per_unit_hour
}

/// Total compute harvested over one day.
///
/// Consumes exactly `config.hours_per_day` standard-normal draws from `rng`,
/// in hour order.
pub fn daily_compute<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> f64 {
    let mut total = 0.0;
    for hour in 0..config.hours_per_day {
        let noise: f64 = rng.sample(StandardNormal);
        let fraction = idle_fraction(hour, config.hours_per_day, config.avg_idle_fraction, noise);
        total += hourly_compute(config.fleet_size, fraction, config.compute_per_unit_hour);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_midnight_without_noise() {
        // sin(0) = 0 -> 0.65 * 0.85
        let f = idle_fraction(0, 24, 0.65, 0.0);
        assert!((f - 0.5525).abs() < 1e-12);
    }

    #[test]
    fn test_peak_hour_clamped_high() {
        // hour 6: sin(pi/2) = 1 -> 0.65 * 1.15 = 0.7475, then large noise pushes past 0.95
        assert!((idle_fraction(6, 24, 0.65, 0.0) - 0.7475).abs() < 1e-12);
        assert_eq!(idle_fraction(6, 24, 0.65, 10.0), MAX_IDLE_FRACTION);
    }

    #[test]
    fn test_trough_clamped_low() {
        assert_eq!(idle_fraction(18, 24, 0.65, -10.0), MIN_IDLE_FRACTION);
    }

    #[test]
    fn test_nan_noise_stays_in_range() {
        let f = idle_fraction(3, 24, 0.65, f64::NAN);
        assert!((MIN_IDLE_FRACTION..=MAX_IDLE_FRACTION).contains(&f));
    }

    #[test]
    fn test_idle_units_truncates() {
        assert_eq!(idle_units(10_000, 0.55259), 5525);
        assert_eq!(idle_units(3, 0.999), 2);
    }

    #[test]
    fn test_daily_compute_bounds() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let total = daily_compute(&config, &mut rng);

        let hours = config.hours_per_day as f64;
        let per_unit = config.compute_per_unit_hour * config.fleet_size as f64;
        assert!(total >= hours * per_unit * MIN_IDLE_FRACTION - hours * config.compute_per_unit_hour);
        assert!(total <= hours * per_unit * MAX_IDLE_FRACTION);
    }

    #[test]
    fn test_daily_compute_consumes_one_draw_per_hour() {
        let config = SimConfig::default();
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(1);

        daily_compute(&config, &mut a);
        for _ in 0..config.hours_per_day {
            let _: f64 = b.sample(StandardNormal);
        }
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
