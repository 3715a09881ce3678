//! Logs command handler

use anyhow::Result;
use overseer_client::AutomationApi;

use crate::view;

/// Fetch and render the most recent execution records
pub async fn handle_logs(api: &dyn AutomationApi, limit: usize) -> Result<()> {
    let page = api.recent_logs(limit).await?;
    view::print_logs(&page);
    Ok(())
}
