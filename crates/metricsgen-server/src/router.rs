//! Axum router wiring.
//!
//! - `/`                         : index page
//! - `/-/health`                 : liveness
//! - `/-/config/duration-interval`, `/-/config/errors-percentage`,
//!   `/-/config/requests-hour`   : GET current value, PUT new value
//! - `/metrics`                  : Prometheus text format

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index::index))
        .route("/-/health", get(ops::health))
        .route(
            "/-/config/duration-interval",
            get(api::get_duration_interval).put(api::put_duration_interval),
        )
        .route(
            "/-/config/errors-percentage",
            get(api::get_errors_percentage).put(api::put_errors_percentage),
        )
        .route(
            "/-/config/requests-hour",
            get(api::get_requests_hour).put(api::put_requests_hour),
        )
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
