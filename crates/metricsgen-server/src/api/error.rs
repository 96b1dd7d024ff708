//! HTTP mapping for `MetricsGenError`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use metricsgen_core::MetricsGenError;

/// Error returned by control-surface handlers.
///
/// Validation and decoding failures are the client's fault (400); anything
/// else, including failing to read the request body, is a 500.
#[derive(Debug)]
pub struct ApiError(pub MetricsGenError);

impl From<MetricsGenError> for ApiError {
    fn from(e: MetricsGenError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.client_code().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.0),
        )
            .into_response()
    }
}
