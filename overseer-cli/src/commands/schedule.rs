//! Schedule command handlers
//!
//! Read, set, and remove the daily trigger. Removal asks for confirmation
//! before any request leaves the machine; declining sends nothing.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Subcommand;
use overseer_client::AutomationApi;
use tracing::warn;

use crate::view::{self, Toast};

/// Schedule subcommands
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Show the current daily trigger
    Status,
    /// Set the daily trigger time
    Set {
        /// Hour of day (validated by the service)
        #[arg(long)]
        hour: u32,

        /// Minute (validated by the service)
        #[arg(long)]
        minute: u32,
    },
    /// Remove the daily trigger
    Remove {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle schedule commands
pub async fn handle_schedule_command(
    api: &dyn AutomationApi,
    command: ScheduleCommands,
) -> Result<()> {
    match command {
        ScheduleCommands::Status => show_status(api).await,
        ScheduleCommands::Set { hour, minute } => set_schedule(api, hour, minute).await,
        ScheduleCommands::Remove { yes } => {
            remove_schedule(api, || yes || confirm_on_stdin()).await
        }
    }
}

async fn show_status(api: &dyn AutomationApi) -> Result<()> {
    let status = api.schedule_status().await?;
    view::print_schedule_panel(&status);
    Ok(())
}

async fn set_schedule(api: &dyn AutomationApi, hour: u32, minute: u32) -> Result<()> {
    match api.set_schedule(hour, minute).await {
        Ok(()) => {
            view::print_toast(&view::schedule_set_toast(hour, minute));
            refresh_status(api).await;
            Ok(())
        }
        Err(e) => {
            view::print_toast(&Toast::error(format!("스케줄 설정 실패: {e}")));
            Err(e.into())
        }
    }
}

async fn remove_schedule(api: &dyn AutomationApi, confirm: impl FnOnce() -> bool) -> Result<()> {
    if !confirm() {
        view::print_toast(&Toast::info("스케줄 제거를 취소했습니다"));
        return Ok(());
    }

    match api.remove_schedule().await {
        Ok(()) => {
            view::print_toast(&view::schedule_removed_toast());
            refresh_status(api).await;
            Ok(())
        }
        Err(e) => {
            view::print_toast(&Toast::error(format!("스케줄 제거 실패: {e}")));
            Err(e.into())
        }
    }
}

/// Re-render the panel after a mutation; a failed read is not fatal here
async fn refresh_status(api: &dyn AutomationApi) {
    match api.schedule_status().await {
        Ok(status) => view::print_schedule_panel(&status),
        Err(e) => warn!("failed to refresh schedule status: {e}"),
    }
}

fn confirm_on_stdin() -> bool {
    print!("자동 실행 스케줄을 제거하시겠습니까? [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
