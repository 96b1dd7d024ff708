//! Random draws for one synthetic request.
//!
//! The random source is always passed in, so callers pick the generator
//! (OS-seeded in production, `seed_from_u64` in tests).

use rand::Rng;

use crate::limits::Limits;

/// Failure draws are taken on a 0.001 grid over `[0, 100)`.
const FAILURE_GRID: u32 = 100_000;
const FAILURE_SCALE: f64 = 1_000.0;

/// One synthetic request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Request duration in seconds.
    pub duration_secs: f64,
    pub failed: bool,
}

/// Uniform integer from the inclusive range `[min, max]`.
pub fn draw_duration<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Bernoulli trial succeeding with probability `errors_percentage / 100`.
pub fn draw_failure<R: Rng>(rng: &mut R, errors_percentage: f64) -> bool {
    let p = f64::from(rng.random_range(0..FAILURE_GRID)) / FAILURE_SCALE;
    p < errors_percentage
}

impl Observation {
    /// Draw the duration first and the failure outcome second, each against
    /// the limits current at the time of the draw.
    pub fn sample<R: Rng>(limits: &Limits, rng: &mut R) -> Self {
        let (min, max) = limits.duration_interval();
        let duration_secs = draw_duration(rng, min, max) as f64;
        let failed = draw_failure(rng, limits.errors_percentage());
        Self {
            duration_secs,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn duration_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let d = draw_duration(&mut rng, 3, 9);
            assert!((3..=9).contains(&d), "out of range: {d}");
        }
    }

    #[test]
    fn duration_reaches_both_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<i64> = (0..10_000).map(|_| draw_duration(&mut rng, 1, 3)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn failure_extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..10_000).all(|_| draw_failure(&mut rng, 100.0)));
        assert!((0..10_000).all(|_| !draw_failure(&mut rng, 0.0)));
    }

    #[test]
    fn failure_rate_tracks_percentage() {
        let mut rng = StdRng::seed_from_u64(42);
        let total = 200_000;
        let failed = (0..total).filter(|_| draw_failure(&mut rng, 25.0)).count();
        let rate = failed as f64 / total as f64 * 100.0;
        assert!((rate - 25.0).abs() < 1.0, "observed {rate}%");
    }

    #[test]
    fn fixed_interval_observes_that_value() {
        let limits = Limits::new(5, 5, 0.0, 3600).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let o = Observation::sample(&limits, &mut rng);
            assert_eq!(o.duration_secs, 5.0);
            assert!(!o.failed);
        }
    }
}
