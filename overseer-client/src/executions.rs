//! Execution-related API endpoints

use crate::AutomationClient;
use crate::error::Result;
use overseer_core::dto::logs::LogsPage;
use overseer_core::dto::run::RunAccepted;

impl AutomationClient {
    /// Trigger a manual run of the automation job
    ///
    /// The job runs in the background on the service; use the log listing to
    /// observe completion of the returned execution id.
    ///
    /// # Returns
    /// The acceptance record, including the opaque execution id
    pub async fn trigger_run(&self) -> Result<RunAccepted> {
        let url = format!("{}/run", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the most recent execution records, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of records to return
    pub async fn recent_logs(&self, limit: usize) -> Result<LogsPage> {
        let url = format!("{}/logs", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
