//! API trait seam
//!
//! The poller and CLI commands depend on this trait rather than on the
//! concrete HTTP client, so tests can substitute an in-memory fake.

use async_trait::async_trait;

use crate::AutomationClient;
use crate::error::Result;
use overseer_core::domain::schedule::ScheduleStatus;
use overseer_core::dto::logs::LogsPage;
use overseer_core::dto::run::RunAccepted;

/// Operations the automation service exposes to clients
#[async_trait]
pub trait AutomationApi: Send + Sync {
    /// Trigger a manual run; returns the acceptance record
    async fn trigger_run(&self) -> Result<RunAccepted>;

    /// Fetch the most recent execution records, newest first
    async fn recent_logs(&self, limit: usize) -> Result<LogsPage>;

    /// Read the current daily schedule status
    async fn schedule_status(&self) -> Result<ScheduleStatus>;

    /// Configure the daily trigger time
    async fn set_schedule(&self, hour: u32, minute: u32) -> Result<()>;

    /// Remove the daily trigger
    async fn remove_schedule(&self) -> Result<()>;
}

#[async_trait]
impl AutomationApi for AutomationClient {
    async fn trigger_run(&self) -> Result<RunAccepted> {
        AutomationClient::trigger_run(self).await
    }

    async fn recent_logs(&self, limit: usize) -> Result<LogsPage> {
        AutomationClient::recent_logs(self, limit).await
    }

    async fn schedule_status(&self) -> Result<ScheduleStatus> {
        AutomationClient::schedule_status(self).await
    }

    async fn set_schedule(&self, hour: u32, minute: u32) -> Result<()> {
        AutomationClient::set_schedule(self, hour, minute).await
    }

    async fn remove_schedule(&self) -> Result<()> {
        AutomationClient::remove_schedule(self).await
    }
}
