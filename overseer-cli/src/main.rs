//! Overseer CLI
//!
//! Terminal dashboard for the automation service: trigger a run and watch it
//! to completion, browse the execution log, and manage the daily schedule.

mod commands;
mod config;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::view::Toast;

#[derive(Parser)]
#[command(name = "overseer")]
#[command(about = "Automation service dashboard CLI", long_about = None)]
struct Cli {
    /// Automation service URL
    #[arg(long, env = "OVERSEER_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "overseer=info,overseer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Even an unanticipated panic ends with user-visible feedback.
    std::panic::set_hook(Box::new(|info| {
        view::print_toast(&Toast::error("예상치 못한 오류가 발생했습니다."));
        tracing::error!("panic: {info}");
    }));

    let cli = Cli::parse();
    let config = Config::new(cli.base_url).apply_env();

    if let Err(e) = run(cli.command, config).await {
        view::print_toast(&Toast::error(format!("오류가 발생했습니다: {e:#}")));
        tracing::error!("command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: Config) -> Result<()> {
    config.validate()?;
    handle_command(command, &config).await
}
