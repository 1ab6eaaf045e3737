// promptpad - a terminal prompt workbench
//
// A single-screen TUI: a multi-line prompt editor and a results panel
// that simulates asynchronous processing behind a fixed delay.
//
// Architecture:
// - Engine: fixed-duration timer + deterministic string interpolation
// - TUI (ratatui): prompt editor, results panel, toasts, status bar
// - Event system: an mpsc channel delivers engine completions to the TUI
// - Logging: captured into an in-memory buffer so the display stays clean

mod cli;
mod config;
mod engine;
mod export;
mod logging;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing: always capture into the TUI log buffer, optionally
/// tee into rotating log files. Returns the file writer guard, which must
/// stay alive for logs to flush.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("promptpad={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()));

    if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender =
                    tracing_appender::rolling::daily(&config.logging.file_dir, "promptpad.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);

                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
                return Some(guard);
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
            }
        }
    }

    registry.init();
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log capture buffer - the TUI owns the screen, so logs go here
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    tracing::info!(version = config::VERSION, "promptpad starting");

    // Engine completions flow over this channel; the TUI holds the
    // receiver, submissions clone the sender
    let (engine_tx, completion_rx) = mpsc::channel::<engine::Completion>(16);

    tui::run_tui(completion_rx, log_buffer, config, engine_tx).await?;

    tracing::info!("promptpad exiting");
    Ok(())
}
