//! metrics-generator core: generation limits, random sampling and the shared
//! error type.
//!
//! This crate carries no transport or runtime dependencies. The limits store
//! is shared between the generation loop and the HTTP control surface in
//! `metricsgen-server`; everything here is synchronous and never blocks on I/O.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `MetricsGenError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod limits;
pub mod sample;

/// Shared result type.
pub use error::{ClientCode, MetricsGenError, Result};
pub use limits::{Limits, LimitsSnapshot};
pub use sample::Observation;
