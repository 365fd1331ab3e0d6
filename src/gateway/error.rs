//! Gateway error types

use thiserror::Error;

/// Errors returned by the backend gateway
///
/// The controller handles every variant the same way. The split exists for
/// logging only.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Network failure, timeout or connection refused
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
