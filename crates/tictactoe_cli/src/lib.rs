//! Terminal front end for [`tictactoe_core`].
//!
//! - **Cli / AppConfig**: command-line flags and the optional TOML file
//! - **Console**: prompts and line reading over any `BufRead`/`Write`
//! - **App**: the Play / View Leaderboard / Quit menu loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod render;

pub use app::{App, MenuChoice, is_reserved_name, parse_mode};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use console::Console;
pub use render::render_board;
