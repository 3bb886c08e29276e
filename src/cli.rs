//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::tui::GameMode;

/// Terminal tic-tac-toe with PvP and a heuristic computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting game mode.
    #[arg(long, value_enum, default_value_t = GameMode::Pvp)]
    pub mode: GameMode,

    /// Cosmetic delay before the computer replies, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,

    /// Seed for the computer's random tie-breaks (omit for entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output (the TUI owns the terminal).
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
