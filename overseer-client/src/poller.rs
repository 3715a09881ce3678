//! Execution poller
//!
//! Watches a triggered run to completion by re-reading the service's
//! execution log on a fixed interval. The poller tracks at most one
//! execution at a time and carries a monotonic deadline computed once when
//! tracking starts, so a cancelled-and-resumed watch keeps the original
//! time budget instead of restarting it.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::api::AutomationApi;
use overseer_core::domain::execution::ExecutionRecord;

/// Poller tuning knobs
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// How often to re-read the execution log
    pub poll_interval: Duration,
    /// Wall-clock budget for one run before giving up
    pub timeout: Duration,
    /// How many recent records to fetch per tick
    pub log_fetch_limit: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(300),
            log_fetch_limit: 10,
        }
    }
}

/// Errors from poller lifecycle misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollerError {
    /// A run is already being tracked; it must finish or be stopped first
    #[error("execution {0} is already being tracked")]
    Busy(String),

    /// `watch` was called with no tracked execution
    #[error("no execution is being tracked")]
    Idle,
}

/// Terminal result of watching one execution
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The run completed and reported success
    Succeeded(ExecutionRecord),
    /// The run completed and reported failure
    Failed {
        /// Error message from the record, when the service provided one
        message: Option<String>,
    },
    /// No completion was observed within the time budget
    TimedOut,
}

struct Tracked {
    execution_id: String,
    deadline: Instant,
}

/// Polls the execution log until a tracked run completes or times out
///
/// One poller instance holds a single tracking slot. [`start`](Self::start)
/// claims it, [`watch`](Self::watch) drives polling to a terminal
/// [`Outcome`], and the slot is cleared on every terminal transition.
pub struct ExecutionPoller {
    api: Arc<dyn AutomationApi>,
    config: PollerConfig,
    tracked: Option<Tracked>,
}

impl ExecutionPoller {
    /// Creates a poller over the given API handle
    pub fn new(api: Arc<dyn AutomationApi>, config: PollerConfig) -> Self {
        Self {
            api,
            config,
            tracked: None,
        }
    }

    /// Begin tracking an execution
    ///
    /// The timeout deadline is fixed here; later `watch` calls poll against
    /// it no matter when they run. Rejects with [`PollerError::Busy`] while
    /// another run is tracked.
    pub fn start(&mut self, execution_id: impl Into<String>) -> Result<(), PollerError> {
        if let Some(tracked) = &self.tracked {
            return Err(PollerError::Busy(tracked.execution_id.clone()));
        }

        self.tracked = Some(Tracked {
            execution_id: execution_id.into(),
            deadline: Instant::now() + self.config.timeout,
        });
        Ok(())
    }

    /// Whether an execution is currently tracked
    pub fn is_active(&self) -> bool {
        self.tracked.is_some()
    }

    /// The tracked execution id, if any
    pub fn tracked_id(&self) -> Option<&str> {
        self.tracked.as_ref().map(|t| t.execution_id.as_str())
    }

    /// Drop the tracked execution without waiting for an outcome
    pub fn stop(&mut self) {
        self.tracked = None;
    }

    /// Poll until the tracked run reaches a terminal outcome
    ///
    /// Each tick fetches the most recent records and scans for the tracked
    /// id; a fetch error is logged and retried on the next tick. Cancelling
    /// the returned future keeps the slot tracked, and a later `watch`
    /// resumes against the original deadline.
    pub async fn watch(&mut self) -> Result<Outcome, PollerError> {
        let (execution_id, deadline) = match &self.tracked {
            Some(tracked) => (tracked.execution_id.clone(), tracked.deadline),
            None => return Err(PollerError::Idle),
        };

        let mut ticker = time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // The deadline wins over a simultaneously-ready tick.
                biased;

                _ = time::sleep_until(deadline) => {
                    warn!(execution_id = %execution_id, "no completion observed within the time budget");
                    self.tracked = None;
                    return Ok(Outcome::TimedOut);
                }

                _ = ticker.tick() => {
                    match self.api.recent_logs(self.config.log_fetch_limit).await {
                        Ok(page) => {
                            if let Some(record) = page.find(&execution_id) {
                                if record.is_completed() {
                                    self.tracked = None;
                                    return Ok(Self::classify(record.clone()));
                                }
                            }
                            debug!(execution_id = %execution_id, "run still in flight");
                        }
                        Err(e) => {
                            warn!(execution_id = %execution_id, "log fetch failed, retrying next tick: {e}");
                        }
                    }
                }
            }
        }
    }

    fn classify(record: ExecutionRecord) -> Outcome {
        if record.success {
            Outcome::Succeeded(record)
        } else {
            Outcome::Failed {
                message: record.error_message.clone(),
            }
        }
    }
}
