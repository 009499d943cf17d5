//! Terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{App, AppConfig, Cli, Console};
use tictactoe_core::ComputerPlayer;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_overrides(cli.seed, cli.no_pause);

    initialize_tracing(config.log_filter());
    info!(config_path = %cli.config.display(), ?config, "Starting tictactoe");

    let computer = match config.seed() {
        Some(seed) => ComputerPlayer::seeded(*seed),
        None => ComputerPlayer::new(),
    };
    let console = Console::new(std::io::stdin().lock(), std::io::stdout(), *config.pause());

    App::new(console, computer).run()?;
    info!("Exited cleanly");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
