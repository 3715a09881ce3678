//! Overseer HTTP Client
//!
//! A simple, type-safe HTTP client for the automation service API, plus the
//! execution poller that watches a triggered run to completion.
//!
//! The service runs the actual automation job; this crate only triggers runs
//! (`POST /run`), reads the execution log (`GET /logs`), and manages the
//! daily schedule (`GET`/`POST`/`DELETE /schedule`).
//!
//! # Example
//!
//! ```no_run
//! use overseer_client::AutomationClient;
//!
//! #[tokio::main]
//! async fn main() -> overseer_client::Result<()> {
//!     let client = AutomationClient::new("http://localhost:8000");
//!
//!     let accepted = client.trigger_run().await?;
//!     println!("Run accepted: {}", accepted.execution_id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod poller;

mod api;
mod executions;
mod schedule;

// Re-export commonly used types
pub use api::AutomationApi;
pub use error::{ClientError, Result};
pub use poller::{ExecutionPoller, Outcome, PollerConfig, PollerError};

use overseer_core::dto::error::ApiErrorBody;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the automation service API
///
/// Methods are grouped into:
/// - Execution lifecycle (trigger a run, read the execution log)
/// - Schedule management (read, set, remove the daily trigger)
#[derive(Debug, Clone)]
pub struct AutomationClient {
    /// Base URL of the service (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl AutomationClient {
    /// Create a new client for the automation service
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use overseer_client::AutomationClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AutomationClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses are mapped to [`ClientError::Api`], carrying the
    /// service's `detail` field when the error body parses, or the raw body
    /// text otherwise.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_body(status.as_u16(), response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body we do not consume
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_body(status.as_u16(), response).await);
        }

        Ok(())
    }

    async fn error_from_body(status: u16, response: reqwest::Response) -> ClientError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let detail = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);

        ClientError::api(status, detail)
    }
}
