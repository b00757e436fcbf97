//! tictac - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod prefs;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use prefs::FilePreferenceStore;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::App;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli)?;

    info!(size = %cli.size, prefs = %cli.prefs.display(), "Starting tictac");

    let store = FilePreferenceStore::open(&cli.prefs);
    info!(path = %store.path().display(), "Preferences ready");

    tui::run(App::new(cli.size, store))
}

/// Sends logs to a file so they don't interfere with the TUI.
fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
