//! Error types for the API client

use matcha_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// The response parsed but did not hold what the endpoint promises
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Config(_) | ApiError::InvalidUrl(_) => ErrorCode::ConfigError,
            ApiError::MissingEnvVar(var) => return CoreError::missing_env(var),
            ApiError::ApiResponse { .. } if err.is_client_error() => ErrorCode::StoreRejected,
            ApiError::Request(_) if err.is_timeout() => ErrorCode::Timeout,
            ApiError::Json(_) | ApiError::UnexpectedResponse(_) => ErrorCode::RequestFailed,
            _ => ErrorCode::NetworkError,
        };
        CoreError::new(code, err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let rejected = ApiError::api_response(401, "Invalid API key");
        assert!(rejected.is_client_error());
        assert!(!rejected.is_server_error());

        let down = ApiError::api_response(503, "Service Unavailable");
        assert!(down.is_server_error());
    }

    #[test]
    fn test_core_conversion() {
        let core: CoreError = ApiError::api_response(409, "duplicate key").into();
        assert_eq!(core.code, ErrorCode::StoreRejected);

        let core: CoreError = ApiError::missing_env("SUPABASE_URL").into();
        assert_eq!(core.code, ErrorCode::MissingEnvVar);

        let core: CoreError = ApiError::api_response(502, "Bad Gateway").into();
        assert_eq!(core.code, ErrorCode::NetworkError);
        assert_eq!(core.exit_code(), matcha_core::error::exit_codes::NETWORK_ERROR);
    }
}
