//! Error types for the usage report CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for usage report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Cloud Controller API errors.
///
/// Any of these aborts the report run; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the access token of the selected session.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and session errors.
///
/// These are raised before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Session '{0}' is not defined in the configuration")]
    SessionNotFound(String),

    #[error("No session selected. Pass --session <NAME> or set default_session in the config.")]
    NoSessionSelected,

    #[error("Session has no API endpoint. Set api_endpoint or USAGE_REPORT_API_ENDPOINT.")]
    MissingApiEndpoint,

    #[error("Session has no access token. Set access_token or USAGE_REPORT_ACCESS_TOKEN.")]
    MissingAccessToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
