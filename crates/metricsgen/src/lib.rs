//! Top-level facade crate for metrics-generator.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use metricsgen_core::*;
}

pub mod server {
    pub use metricsgen_server::*;
}
