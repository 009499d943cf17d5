//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer opponent's moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't wait for Enter between screens
    #[arg(long)]
    pub no_pause: bool,
}
