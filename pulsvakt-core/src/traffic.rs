//! Traffic load generator.
//!
//! Produces one bounded pseudo-random integer per call, shaped by a fixed
//! time-of-day band so the series looks like daily traffic.

use rand::Rng;

/// Lowest value the generator will ever return.
pub const MIN_TRAFFIC: u32 = 10;

/// Simulated active-traffic load for the given hour of day.
///
/// Base load per band: business hours `9..=17` are highest, morning `6..9`
/// and evening `18..=22` are moderate, night is low. A uniform perturbation
/// in `[-20, +20)` is added, floored, and clamped to [`MIN_TRAFFIC`].
pub fn traffic_value<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> u32 {
    let base: f64 = match hour {
        9..=17 => 80.0,
        6..=8 => 60.0,
        18..=22 => 70.0,
        _ => 30.0,
    };
    let variation = (rng.random::<f64>() - 0.5) * 40.0;
    ((base + variation).floor() as i64).max(i64::from(MIN_TRAFFIC)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn respects_minimum() {
        let mut rng = SmallRng::seed_from_u64(7);
        for hour in 0..24 {
            for _ in 0..200 {
                assert!(traffic_value(hour, &mut rng) >= MIN_TRAFFIC);
            }
        }
    }

    #[test]
    fn stays_within_band_envelope() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..500 {
            // Business-hours base 80 with a [-20, +20) perturbation.
            let value = traffic_value(12, &mut rng);
            assert!((60..100).contains(&value), "out of envelope: {value}");
        }
    }

    #[test]
    fn band_boundaries_match_daily_pattern() {
        // Fixed perturbation draws make the base observable: with the same
        // seed the first draw is identical across hours, so band ordering
        // shows through directly.
        let value_at = |hour: u32| traffic_value(hour, &mut SmallRng::seed_from_u64(3));
        assert_eq!(value_at(9), value_at(17));
        assert_eq!(value_at(6), value_at(8));
        assert_eq!(value_at(18), value_at(22));
        assert_eq!(value_at(23), value_at(5));
        assert!(value_at(12) > value_at(2));
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        let left: Vec<u32> = (0..32).map(|_| traffic_value(14, &mut a)).collect();
        let right: Vec<u32> = (0..32).map(|_| traffic_value(14, &mut b)).collect();
        assert_eq!(left, right);
    }
}
