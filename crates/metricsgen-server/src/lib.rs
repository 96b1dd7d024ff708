//! metrics-generator server library entry.
//!
//! This crate wires the generation loop, the limits store shared with the
//! HTTP control surface, and the metrics registry into one process. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod generator;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod shutdown;
