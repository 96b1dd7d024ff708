//! Generation loop.
//!
//! Each iteration samples one synthetic request against the current limits,
//! forwards it to the sinks, then waits for the current pacing interval. The
//! wait is the only place where shutdown is observed.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

use metricsgen_core::{Limits, MetricsGenError, Observation, Result};

/// Receives the duration of every generated request, in seconds.
pub trait DurationSink: Send + Sync {
    fn observe(&self, secs: f64);
}

/// Counts generated requests that failed.
pub trait FailureSink: Send + Sync {
    fn increment(&self);
}

pub struct Generator<R = StdRng> {
    limits: Arc<Limits>,
    duration: Arc<dyn DurationSink>,
    failures: Arc<dyn FailureSink>,
    rng: R,
}

impl Generator<StdRng> {
    /// Generator seeded from the OS.
    pub fn new(
        limits: Arc<Limits>,
        duration: Arc<dyn DurationSink>,
        failures: Arc<dyn FailureSink>,
    ) -> Self {
        Self::with_rng(limits, duration, failures, StdRng::from_os_rng())
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(
        limits: Arc<Limits>,
        duration: Arc<dyn DurationSink>,
        failures: Arc<dyn FailureSink>,
        rng: R,
    ) -> Self {
        Self {
            limits,
            duration,
            failures,
            rng,
        }
    }

    /// Produce one observation and forward it to the sinks.
    pub fn step(&mut self) -> Observation {
        let obs = Observation::sample(&self.limits, &mut self.rng);

        self.duration.observe(obs.duration_secs);
        if obs.failed {
            self.failures.increment();
        }

        tracing::debug!(
            duration_secs = obs.duration_secs,
            failed = obs.failed,
            "generated request"
        );
        obs
    }

    /// Run until `shutdown` turns `true`.
    ///
    /// Shutdown is a normal exit (`Ok`). If the sender is dropped without
    /// signalling, the loop can no longer be stopped cleanly and returns
    /// `MetricsGenError::Fatal`.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        tracing::info!("generator started");

        loop {
            self.step();

            // Re-read every iteration so rate changes apply at the next boundary.
            let pacing = self.limits.pacing_interval();

            tokio::select! {
                _ = tokio::time::sleep(pacing) => {}
                res = async { shutdown.wait_for(|stop| *stop).await.map(|_| ()) } => {
                    return match res {
                        Ok(()) => {
                            tracing::info!("generator stopped");
                            Ok(())
                        }
                        Err(_) => Err(MetricsGenError::Fatal(
                            "shutdown signal dropped without cancelling".into(),
                        )),
                    };
                }
            }
        }
    }
}
