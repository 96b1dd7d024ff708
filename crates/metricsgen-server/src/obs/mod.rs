//! In-process metrics.
//!
//! The generated request stream is recorded here and rendered by `/metrics`
//! in Prometheus text format.

pub mod metrics;

pub use metrics::{Counter, CounterVec, GeneratorMetrics, Histogram};
