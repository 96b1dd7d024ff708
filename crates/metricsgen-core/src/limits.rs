//! Generation limits: the mutable configuration shared by the generator and
//! the HTTP control surface.
//!
//! The whole record sits behind one `RwLock`, so a reader never sees a
//! duration pair assembled from two different writes. Setters validate first
//! and only take the write lock once the new values are known to be good.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::error::{MetricsGenError, Result};

const NANOS_PER_HOUR: u64 = 3_600 * 1_000_000_000;

/// Consistent view of every limit, taken under a single read lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitsSnapshot {
    pub min_duration: i64,
    pub max_duration: i64,
    pub errors_percentage: f64,
    pub requests_hour: i64,
    pub pacing_interval: Duration,
}

#[derive(Debug)]
struct LimitsState {
    min_duration: i64,
    max_duration: i64,
    errors_percentage: f64,
    requests_hour: i64,
    pacing_interval: Duration,
}

/// Concurrency-safe generation limits.
///
/// There is no `Default`: the only way to get a `Limits` is [`Limits::new`],
/// which validates every field.
#[derive(Debug)]
pub struct Limits {
    state: RwLock<LimitsState>,
}

impl Limits {
    pub fn new(
        min_duration: i64,
        max_duration: i64,
        errors_percentage: f64,
        requests_hour: i64,
    ) -> Result<Self> {
        validate_duration_interval(min_duration, max_duration)?;
        validate_errors_percentage(errors_percentage)?;
        let pacing_interval = pacing_for(requests_hour)?;

        Ok(Self {
            state: RwLock::new(LimitsState {
                min_duration,
                max_duration,
                errors_percentage,
                requests_hour,
                pacing_interval,
            }),
        })
    }

    pub fn duration_interval(&self) -> (i64, i64) {
        let s = self.read();
        (s.min_duration, s.max_duration)
    }

    pub fn set_duration_interval(&self, min_duration: i64, max_duration: i64) -> Result<()> {
        validate_duration_interval(min_duration, max_duration)?;

        let mut s = self.write();
        s.min_duration = min_duration;
        s.max_duration = max_duration;
        Ok(())
    }

    pub fn errors_percentage(&self) -> f64 {
        self.read().errors_percentage
    }

    pub fn set_errors_percentage(&self, errors_percentage: f64) -> Result<()> {
        validate_errors_percentage(errors_percentage)?;

        self.write().errors_percentage = errors_percentage;
        Ok(())
    }

    pub fn requests_hour(&self) -> i64 {
        self.read().requests_hour
    }

    /// Set the generation rate and recompute the pacing interval.
    ///
    /// The interval is one hour of nanoseconds divided by the rate, truncated
    /// toward zero. Rates that do not divide an hour evenly therefore sleep
    /// slightly less than the exact reciprocal, and the long-run rate ends up
    /// a hair above the requested one.
    pub fn set_requests_hour(&self, requests_hour: i64) -> Result<()> {
        let pacing_interval = pacing_for(requests_hour)?;

        let mut s = self.write();
        s.requests_hour = requests_hour;
        s.pacing_interval = pacing_interval;
        Ok(())
    }

    /// Sleep between two generated requests.
    pub fn pacing_interval(&self) -> Duration {
        self.read().pacing_interval
    }

    pub fn snapshot(&self) -> LimitsSnapshot {
        let s = self.read();
        LimitsSnapshot {
            min_duration: s.min_duration,
            max_duration: s.max_duration,
            errors_percentage: s.errors_percentage,
            requests_hour: s.requests_hour,
            pacing_interval: s.pacing_interval,
        }
    }

    // Critical sections only assign plain values, so a poisoned lock still
    // guards a consistent record.
    fn read(&self) -> RwLockReadGuard<'_, LimitsState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LimitsState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_duration_interval(min_duration: i64, max_duration: i64) -> Result<()> {
    if min_duration <= 0 {
        return Err(MetricsGenError::invalid(
            "minimum duration is less than or equal to zero",
        ));
    }
    if max_duration <= 0 {
        return Err(MetricsGenError::invalid(
            "maximum duration is less than or equal to zero",
        ));
    }
    if max_duration < min_duration {
        return Err(MetricsGenError::invalid(
            "maximum duration is less than minimum duration",
        ));
    }
    Ok(())
}

fn validate_errors_percentage(errors_percentage: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&errors_percentage) {
        return Err(MetricsGenError::invalid("value is not a valid percentage"));
    }
    Ok(())
}

fn pacing_for(requests_hour: i64) -> Result<Duration> {
    let rate = u64::try_from(requests_hour)
        .ok()
        .filter(|r| *r > 0)
        .ok_or_else(|| {
            MetricsGenError::invalid("requests per hour is less than or equal to zero")
        })?;
    Ok(Duration::from_nanos(NANOS_PER_HOUR / rate))
}
