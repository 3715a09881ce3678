//! Error types for the Overseer client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the automation service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, DNS, body read, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service rejected the request with an error status
    #[error("API error (status {status}): {detail}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error detail from the service, or raw body when unparseable
        detail: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create an API error from status code and detail message
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
