//! Schedule management API endpoints

use crate::AutomationClient;
use crate::error::Result;
use overseer_core::domain::schedule::ScheduleStatus;
use overseer_core::dto::schedule::ScheduleEnvelope;

impl AutomationClient {
    /// Read the current daily schedule status
    pub async fn schedule_status(&self) -> Result<ScheduleStatus> {
        let url = format!("{}/schedule", self.base_url);
        let response = self.client.get(&url).send().await?;

        let envelope: ScheduleEnvelope = self.handle_response(response).await?;
        Ok(envelope.cron_status)
    }

    /// Configure the daily trigger time
    ///
    /// Hour and minute are passed through as-is; the service rejects
    /// out-of-range values.
    pub async fn set_schedule(&self, hour: u32, minute: u32) -> Result<()> {
        let url = format!("{}/schedule", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("hour", hour), ("minute", minute)])
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Remove the daily trigger
    pub async fn remove_schedule(&self) -> Result<()> {
        let url = format!("{}/schedule", self.base_url);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
