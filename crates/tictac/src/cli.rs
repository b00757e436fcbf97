//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;
use tictac_core::BoardSize;

/// Tic-tac-toe in the terminal on 3x3, 4x4 or 5x5 boards
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial board size (3, 4 or 5)
    #[arg(short, long, default_value = "3")]
    pub size: BoardSize,

    /// Preference file holding the theme choice
    #[arg(long, default_value = "tictac_prefs.toml")]
    pub prefs: PathBuf,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "tictac.log")]
    pub log_file: PathBuf,
}
