//! Shared error type across metrics-generator crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Rejected by configuration validation.
    InvalidArgument,
    /// Request body could not be decoded.
    BadRequest,
    /// Unsupported config file version.
    UnsupportedVersion,
    /// Cancellation mechanism failed.
    Fatal,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidArgument => "INVALID_ARGUMENT",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Fatal => "FATAL",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Whether the caller is at fault (maps to a 4xx over HTTP).
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ClientCode::InvalidArgument | ClientCode::BadRequest | ClientCode::UnsupportedVersion
        )
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsGenError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MetricsGenError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("fatal: {0}")]
    Fatal(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsGenError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsGenError::InvalidArgument(_) => ClientCode::InvalidArgument,
            MetricsGenError::BadRequest(_) => ClientCode::BadRequest,
            MetricsGenError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MetricsGenError::Fatal(_) => ClientCode::Fatal,
            MetricsGenError::Internal(_) => ClientCode::Internal,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MetricsGenError::InvalidArgument(msg.into())
    }
}
