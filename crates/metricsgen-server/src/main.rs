//! metrics-generator
//!
//! Emits synthetic request durations and failures as Prometheus metrics at a
//! configurable rate. Limits can be changed at runtime over HTTP.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metricsgen_server::{cli::Cli, server, shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match Cli::parse().into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let (tx, rx) = shutdown::channel();
    tokio::spawn(async move {
        shutdown::os_signal().await;
        let _ = tx.send(true);
    });

    match server::run(cfg, rx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                error = %e,
                code = e.client_code().as_str(),
                "metrics-generator failed"
            );
            ExitCode::FAILURE
        }
    }
}
