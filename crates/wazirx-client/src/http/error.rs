/*
[INPUT]:  Error sources (registry lookup, request building, transport, API)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the WazirX client
#[derive(Error, Debug)]
pub enum WazirxError {
    /// Operation name is not present in the endpoint registry
    #[error("Invalid operation: {name}")]
    InvalidOperation { name: String },

    /// Registry entry declares an HTTP action other than get/post/delete
    #[error("Invalid action type: {action}")]
    InvalidAction { action: String },

    /// Registry entry declares a client type other than public/signed
    #[error("Invalid client type: {client}")]
    InvalidAuthClass { client: String },

    /// Registry source could not be parsed
    #[error("Registry parse error: {0}")]
    Registry(#[from] serde_json::Error),

    /// Outbound request could not be built
    #[error("Request construction failed: {0}")]
    RequestConstruction(String),

    /// HTTP call did not complete
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for WazirxError {
    fn from(err: url::ParseError) -> Self {
        WazirxError::RequestConstruction(format!("invalid URL: {err}"))
    }
}

impl WazirxError {
    /// Check if the error is worth retrying.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            WazirxError::Transport(_) | WazirxError::ResponseRead(_) => true,
            WazirxError::Api { code, .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WazirxError::Api { code, .. } => StatusCode::from_u16(*code).ok(),
            WazirxError::Transport(err) | WazirxError::ResponseRead(err) => err.status(),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        WazirxError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for WazirX operations
pub type Result<T> = std::result::Result<T, WazirxError>;
