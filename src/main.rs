// dogdex - a terminal guide to dogs
//
// One informational view behind a three-way section switcher:
// - Breeds: six breed cards (name, placeholder image URL, description)
// - Fun Facts: five trivia cards
// - Care Tips: five title/body cards
//
// Architecture:
// - content: the fixed catalogs, compiled in and never mutated
// - tui (ratatui): tabbed interface, search box, card selection
// - print: the same catalogs rendered to stdout (print subcommand, headless)
// - config/theme: TOML files under ~/.config/dogdex/
// - logging: tracing captured in-memory so the TUI stays clean

mod cli;
mod config;
mod content;
mod logging;
mod print;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config, print, themes)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    // Load configuration to determine TUI vs headless mode
    let config = Config::from_env();

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing with conditional output:
    // - TUI mode: capture logs to the buffer (prevents garbling the display)
    // - Headless mode: log to stdout
    // - File logging: optionally write rotating files in addition to the above
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("dogdex={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to non-file logging
                init_without_file(&config, filter, &log_buffer);
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen on a background thread; JSON for structured parsing
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                if config.enable_tui {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer())
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                }

                Some(guard)
            }
        } else {
            init_without_file(&config, filter, &log_buffer);
            None
        };

    if config.enable_tui {
        tracing::info!("Starting TUI");
        if let Err(e) = tui::run_tui(config, log_buffer).await {
            tracing::error!("TUI error: {:?}", e);
        }
    } else {
        // Headless: render every section to stdout once and exit
        tracing::info!("TUI disabled, printing all sections");
        print::print_target(print::PrintTarget::All);
    }

    Ok(())
}

/// Initialize tracing without a file layer
fn init_without_file(config: &Config, filter: EnvFilter, log_buffer: &LogBuffer) {
    if config.enable_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
