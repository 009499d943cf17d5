//! Tic-tac-toe game engine.
//!
//! Everything here is free of terminal I/O so it can be driven from a
//! console, a script or a test:
//!
//! - **Board**: the 3x3 grid and win/full/empty-cell queries
//! - **Resolver**: typed row/column text to a board index, or a [`Rejection`]
//! - **Computer**: uniform random choice among empty cells
//! - **Leaderboard**: case-insensitive win counts
//! - **Session**: the turn state machine tying the above together
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Leaderboard, Outcome, SessionConfig, Mark};
//!
//! let mut leaderboard = Leaderboard::new();
//! let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
//! for index in [0, 3, 1, 4, 2] {
//!     session.apply_move(index, &mut leaderboard).unwrap();
//! }
//! assert_eq!(session.outcome(), Some(Outcome::Win(Mark::X)));
//! assert_eq!(leaderboard.wins("ann"), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod computer;
mod leaderboard;
mod resolver;
mod session;
mod types;

pub use board::{Board, CELLS, WINNING_LINES, coordinates};
pub use computer::{COMPUTER_NAME, ComputerPlayer};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use resolver::{HumanPlayer, MoveInput, Rejection, resolve};
pub use session::{
    GameEvent, GameSession, Mode, MoveSource, Outcome, Seat, SessionConfig, SessionError,
    SessionState, Turn,
};
pub use types::{Mark, Square};
