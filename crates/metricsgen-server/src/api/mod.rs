//! Configuration endpoints.
//!
//! Values travel as plain text: `"<min>,<max>"` for the duration interval, a
//! float for the errors percentage and an integer for the rate. GET responses
//! end with a newline, successful PUTs answer `OK`.

pub mod error;
pub mod index;

use axum::{body::Body, extract::State};
use futures_util::StreamExt;

use metricsgen_core::{MetricsGenError, Result};

use crate::app_state::AppState;

pub use error::ApiError;

/// Upper bound on PUT bodies.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

const OK: &str = "OK\n";

pub async fn get_duration_interval(State(state): State<AppState>) -> String {
    let (min, max) = state.limits().duration_interval();
    format!("{min},{max}\n")
}

pub async fn put_duration_interval(
    State(state): State<AppState>,
    body: Body,
) -> std::result::Result<&'static str, ApiError> {
    let text = read_body(body).await?;
    let res = parse_duration_interval(&text).and_then(|(min, max)| {
        state.limits().set_duration_interval(min, max)?;
        Ok((min, max))
    });
    let (min, max) = record_update(&state, "duration_interval", res)?;

    tracing::info!(min, max, "duration interval updated");
    Ok(OK)
}

pub async fn get_errors_percentage(State(state): State<AppState>) -> String {
    format!("{}\n", state.limits().errors_percentage())
}

pub async fn put_errors_percentage(
    State(state): State<AppState>,
    body: Body,
) -> std::result::Result<&'static str, ApiError> {
    let text = read_body(body).await?;
    let res = parse_errors_percentage(&text).and_then(|pct| {
        state.limits().set_errors_percentage(pct)?;
        Ok(pct)
    });
    let errors_percentage = record_update(&state, "errors_percentage", res)?;

    tracing::info!(errors_percentage, "errors percentage updated");
    Ok(OK)
}

pub async fn get_requests_hour(State(state): State<AppState>) -> String {
    format!("{}\n", state.limits().requests_hour())
}

pub async fn put_requests_hour(
    State(state): State<AppState>,
    body: Body,
) -> std::result::Result<&'static str, ApiError> {
    let text = read_body(body).await?;
    let res = parse_requests_hour(&text).and_then(|rate| {
        state.limits().set_requests_hour(rate)?;
        Ok(rate)
    });
    let requests_hour = record_update(&state, "requests_hour", res)?;

    tracing::info!(requests_hour, "requests per hour updated");
    Ok(OK)
}

/// Count the outcome of an update and turn a rejection into a client error.
fn record_update<T>(state: &AppState, setting: &'static str, res: Result<T>) -> Result<T> {
    let result = if res.is_ok() { "ok" } else { "rejected" };
    state
        .metrics()
        .config_updates
        .inc(&[("setting", setting), ("result", result)]);

    if let Err(e) = &res {
        tracing::warn!(setting, error = %e, "config update rejected");
    }
    res
}

/// Buffer the request body.
///
/// A body larger than `MAX_BODY_BYTES` is the caller's fault (`BadRequest`);
/// a failing stream is `Internal`.
async fn read_body(body: Body) -> Result<String> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| MetricsGenError::Internal(format!("read body: {e}")))?;
        if buf.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(MetricsGenError::BadRequest(format!(
                "request body exceeds {MAX_BODY_BYTES} bytes"
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    String::from_utf8(buf)
        .map_err(|e| MetricsGenError::BadRequest(format!("body is not utf-8: {e}")))
}

pub fn parse_duration_interval(s: &str) -> Result<(i64, i64)> {
    let (min, max) = s.trim().split_once(',').ok_or_else(|| {
        MetricsGenError::BadRequest("parse duration interval: expected \"<min>,<max>\"".into())
    })?;
    let min = min
        .trim()
        .parse()
        .map_err(|e| MetricsGenError::BadRequest(format!("parse minimum duration: {e}")))?;
    let max = max
        .trim()
        .parse()
        .map_err(|e| MetricsGenError::BadRequest(format!("parse maximum duration: {e}")))?;
    Ok((min, max))
}

pub fn parse_errors_percentage(s: &str) -> Result<f64> {
    s.trim()
        .parse()
        .map_err(|e| MetricsGenError::BadRequest(format!("parse errors percentage: {e}")))
}

pub fn parse_requests_hour(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .map_err(|e| MetricsGenError::BadRequest(format!("parse requests hour: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_interval_parsing() {
        assert_eq!(parse_duration_interval("12,34").unwrap(), (12, 34));
        assert_eq!(parse_duration_interval(" 1 , 2\n").unwrap(), (1, 2));
        assert_eq!(parse_duration_interval("-1,2").unwrap(), (-1, 2));
        assert!(parse_duration_interval("boom").is_err());
        assert!(parse_duration_interval("1,2,3").is_err());
        assert!(parse_duration_interval("1.5,2").is_err());
    }

    #[test]
    fn scalar_parsing() {
        assert_eq!(parse_errors_percentage("12.5\n").unwrap(), 12.5);
        assert!(parse_errors_percentage("boom").is_err());
        assert_eq!(parse_requests_hour("4").unwrap(), 4);
        assert!(parse_requests_hour("skywalker").is_err());
        assert!(parse_requests_hour("1.5").is_err());
    }

    #[test]
    fn accepted_update_yields_the_applied_value() {
        use std::sync::Arc;

        use metricsgen_core::Limits;

        use crate::obs::GeneratorMetrics;

        let state = AppState::new(
            Arc::new(Limits::new(1, 10, 10.0, 1000).unwrap()),
            Arc::new(GeneratorMetrics::default()),
        );

        let applied = record_update(&state, "requests_hour", Ok(42_i64)).unwrap();
        assert_eq!(applied, 42);

        let err = record_update::<i64>(
            &state,
            "requests_hour",
            Err(MetricsGenError::InvalidArgument("nope".into())),
        )
        .unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_ARGUMENT");
        assert_eq!(
            state
                .metrics()
                .config_updates
                .get(&[("setting", "requests_hour"), ("result", "ok")]),
            1
        );
    }
}
