//! Shared application state for the control surface.
//!
//! The limits store is the same `Arc` the generator reads from, so every
//! accepted update is picked up at the generator's next iteration.

use std::sync::Arc;

use metricsgen_core::Limits;

use crate::obs::GeneratorMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    limits: Arc<Limits>,
    metrics: Arc<GeneratorMetrics>,
}

impl AppState {
    pub fn new(limits: Arc<Limits>, metrics: Arc<GeneratorMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { limits, metrics }),
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.inner.limits
    }

    pub fn metrics(&self) -> &GeneratorMetrics {
        &self.inner.metrics
    }
}
