//! Random-move computer opponent.

use crate::board::Board;
use crate::session::{MoveSource, SessionError, Turn};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, instrument};

/// Name bound to O when playing against the computer.
pub const COMPUTER_NAME: &str = "computer";

/// Computer that picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a computer player whose choices are reproducible.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a random empty index, or `None` if the board is full.
    #[instrument(skip(self, board))]
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let choice = board.empty_indices().choose(&mut self.rng).copied();
        debug!(?choice, "Computer chose");
        choice
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for ComputerPlayer {
    fn next_move(&mut self, turn: &Turn<'_>) -> Result<usize, SessionError> {
        self.choose_move(turn.board())
            .ok_or(SessionError::NoMovesAvailable)
    }
}
