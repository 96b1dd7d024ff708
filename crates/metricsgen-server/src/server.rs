//! Runs the generator and the control surface side by side.
//!
//! Either side failing stops the other. A requested shutdown stops the
//! generator at its next pacing wait and lets the server drain for at most
//! `server.shutdown_timeout_ms`.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use metricsgen_core::{MetricsGenError, Result};

use crate::app_state::AppState;
use crate::config::GeneratorConfig;
use crate::generator::{DurationSink, FailureSink, Generator};
use crate::obs::GeneratorMetrics;
use crate::{router, shutdown};

pub async fn run(cfg: GeneratorConfig, stop: watch::Receiver<bool>) -> Result<()> {
    let listen = cfg.server.listen_addr()?;
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsGenError::Internal(format!("bind {listen}: {e}")))?;

    run_with_listener(cfg, listener, stop).await
}

/// Same as [`run`] on an already bound listener.
pub async fn run_with_listener(
    cfg: GeneratorConfig,
    listener: TcpListener,
    stop: watch::Receiver<bool>,
) -> Result<()> {
    let limits = Arc::new(cfg.limits.build()?);
    let metrics = Arc::new(GeneratorMetrics::default());

    let s = limits.snapshot();
    tracing::info!(
        listen = ?listener.local_addr().ok(),
        min_duration = s.min_duration,
        max_duration = s.max_duration,
        errors_percentage = s.errors_percentage,
        requests_hour = s.requests_hour,
        "metrics-generator starting"
    );

    let duration: Arc<dyn DurationSink> = metrics.request_duration.clone();
    let failures: Arc<dyn FailureSink> = metrics.request_errors.clone();
    let mut generator = Generator::new(Arc::clone(&limits), duration, failures);
    let app = router::build_router(AppState::new(limits, metrics));
    let grace = Duration::from_millis(cfg.server.shutdown_timeout_ms);

    tokio::try_join!(
        generator.run(stop.clone()),
        serve(listener, app, stop, grace),
    )?;

    tracing::info!("metrics-generator stopped");
    Ok(())
}

async fn serve(
    listener: TcpListener,
    app: Router,
    stop: watch::Receiver<bool>,
    grace: Duration,
) -> Result<()> {
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::requested(stop.clone()))
        .into_future();

    let deadline = async {
        shutdown::requested(stop).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        res = server => res.map_err(|e| MetricsGenError::Internal(format!("server failed: {e}"))),
        _ = deadline => {
            tracing::warn!(?grace, "server did not drain in time, dropping open connections");
            Ok(())
        }
    }
}
