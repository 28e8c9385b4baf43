//! tabfix - reversible one-shot class fixes for the active browser tab.
//!
//! Main entry point for the tabfix CLI.

mod app;
mod cli;
mod commands;

use clap::Parser;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tabfix_config::tabfix_dir;

use crate::app::{App, default_config_path, load_config};
use crate::cli::Cli;
use crate::commands::handle_command;

/// Initialize tracing with console and file output.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = tabfix_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tabfix")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the file writer flushing for the life of the process.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console on stderr; stdout carries command output.
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    debug!("Loading config from {}", config_path.display());
    let config = load_config(&config_path, cli.endpoint)?;

    let app = App::build(&config).await?;
    handle_command(cli.command, &app).await
}
