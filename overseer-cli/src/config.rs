//! CLI configuration
//!
//! Service URL plus poller tuning. Defaults match the service's dashboard
//! behavior (2 s polls, 5 minute budget, 10-record log pages); environment
//! variables override them per invocation.

use std::time::Duration;

use overseer_client::PollerConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the automation service
    pub base_url: String,

    /// Poller tuning (interval, timeout, log fetch limit)
    pub poller: PollerConfig,

    /// Pause between a terminal outcome and the follow-up log refresh
    pub refresh_delay: Duration,
}

impl Config {
    /// Creates a configuration with defaults for the given service URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poller: PollerConfig::default(),
            refresh_delay: Duration::from_secs(1),
        }
    }

    /// Applies environment variable overrides
    ///
    /// Recognized variables:
    /// - `OVERSEER_POLL_INTERVAL` (seconds)
    /// - `OVERSEER_POLL_TIMEOUT` (seconds)
    /// - `OVERSEER_LOG_LIMIT` (record count)
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    fn apply_env_from(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(secs) = get("OVERSEER_POLL_INTERVAL").and_then(|s| s.parse::<u64>().ok()) {
            self.poller.poll_interval = Duration::from_secs(secs);
        }

        if let Some(secs) = get("OVERSEER_POLL_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            self.poller.timeout = Duration::from_secs(secs);
        }

        if let Some(limit) = get("OVERSEER_LOG_LIMIT").and_then(|s| s.parse::<usize>().ok()) {
            self.poller.log_fetch_limit = limit;
        }

        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poller.poll_interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        if self.poller.timeout < self.poller.poll_interval {
            anyhow::bail!("poll timeout must be at least one poll interval");
        }

        if self.poller.log_fetch_limit == 0 {
            anyhow::bail!("log fetch limit must be greater than 0");
        }

        Ok(())
    }
}
