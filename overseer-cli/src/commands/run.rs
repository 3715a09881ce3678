//! Run command handler
//!
//! Triggers a run on the service, watches the execution log until the run
//! completes (or the time budget runs out), and refreshes the log list once
//! the record has settled.

use std::sync::Arc;

use anyhow::Result;
use overseer_client::{AutomationApi, ExecutionPoller};
use tokio::time;
use tracing::info;

use crate::config::Config;
use crate::view::{self, Banner, Toast};

/// Trigger a run; when `watch` is set, poll it to a terminal outcome
pub async fn handle_run(api: Arc<dyn AutomationApi>, config: &Config, watch: bool) -> Result<()> {
    let mut poller = ExecutionPoller::new(Arc::clone(&api), config.poller.clone());

    view::print_banner(&Banner::running());

    let accepted = match api.trigger_run().await {
        Ok(accepted) => accepted,
        Err(e) => {
            // Rejected trigger: surface the detail and return to idle.
            view::print_banner(&Banner::error(&e.to_string()));
            return Err(e.into());
        }
    };
    info!(execution_id = %accepted.execution_id, "run accepted");

    if !watch {
        view::print_toast(&Toast::info(format!(
            "실행이 시작되었습니다: {}",
            accepted.execution_id
        )));
        return Ok(());
    }

    poller.start(accepted.execution_id.as_str())?;
    view::print_banner(&Banner::started());

    let outcome = poller.watch().await?;
    view::print_banner(&Banner::from_outcome(&outcome));

    // Give the service a moment to settle, then show the fresh log list
    // (replaces the dashboard's full page reload).
    time::sleep(config.refresh_delay).await;
    match api.recent_logs(config.poller.log_fetch_limit).await {
        Ok(page) => view::print_logs(&page),
        Err(e) => tracing::warn!("failed to refresh logs after run: {e}"),
    }

    Ok(())
}
