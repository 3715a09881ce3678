//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod logs;
mod run;
mod schedule;

pub use schedule::ScheduleCommands;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use overseer_client::{AutomationApi, AutomationClient};

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger a run and watch it to completion
    Run {
        /// Trigger the run without waiting for its outcome
        #[arg(long)]
        no_watch: bool,
    },
    /// Show recent executions
    Logs {
        /// Maximum number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Schedule management
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let api: Arc<dyn AutomationApi> =
        Arc::new(AutomationClient::with_client(config.base_url.clone(), http));

    match command {
        Commands::Run { no_watch } => run::handle_run(api, config, !no_watch).await,
        Commands::Logs { limit } => {
            logs::handle_logs(&*api, limit.unwrap_or(config.poller.log_fetch_limit)).await
        }
        Commands::Schedule { command } => schedule::handle_schedule_command(&*api, command).await,
    }
}
