//! Turning typed row/column text into a board index.
//!
//! [`resolve`] is a pure check. [`HumanPlayer`] wraps it in the re-prompt
//! loop: it keeps asking its [`MoveInput`] until a move resolves, so a
//! rejection never reaches the board or advances the turn.

use crate::board::Board;
use crate::session::{GameEvent, MoveSource, SessionError, Turn};
use tracing::{debug, instrument};

/// Why a typed move was refused. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Row or column is not a non-negative integer.
    #[display("Please enter numbers!")]
    NotANumber,

    /// Row or column is outside 1-3.
    #[display("Please choose numbers between 1 and 3!")]
    OutOfRange,

    /// The addressed cell already holds a mark.
    #[display("That spot is already taken!")]
    CellTaken,
}

impl std::error::Error for Rejection {}

/// Parses a token made only of ASCII digits.
///
/// `Some(None)` means "digits, but too large to represent", which the
/// caller reports as out of range rather than as not-a-number.
fn parse_digits(token: &str) -> Option<Option<u64>> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().ok())
}

/// Validates 1-based `raw_row`/`raw_col` against `board` and returns the
/// 0-based index `(row - 1) * 3 + (col - 1)`.
#[instrument(skip(board))]
pub fn resolve(raw_row: &str, raw_col: &str, board: &Board) -> Result<usize, Rejection> {
    let (Some(row), Some(col)) = (parse_digits(raw_row), parse_digits(raw_col)) else {
        return Err(Rejection::NotANumber);
    };

    let in_range = |v: Option<u64>| v.filter(|n| (1..=3).contains(n));
    let (Some(row), Some(col)) = (in_range(row), in_range(col)) else {
        return Err(Rejection::OutOfRange);
    };

    let index = ((row - 1) * 3 + (col - 1)) as usize;
    if !board.is_empty(index) {
        return Err(Rejection::CellTaken);
    }

    debug!(row, col, index, "Move resolved");
    Ok(index)
}

/// Source of raw row/column text for a human seat.
pub trait MoveInput {
    /// Reads the row token, then the column token, for `turn`.
    fn read_coordinates(&mut self, turn: &Turn<'_>) -> Result<(String, String), SessionError>;

    /// Reports a refused move before the next attempt.
    fn reject(&mut self, rejection: Rejection) -> Result<(), SessionError>;

    /// Sees every session event; ignores them by default.
    fn observe(&mut self, _event: &GameEvent, _board: &Board) -> Result<(), SessionError> {
        Ok(())
    }
}

impl<T: MoveInput + ?Sized> MoveInput for &mut T {
    fn read_coordinates(&mut self, turn: &Turn<'_>) -> Result<(String, String), SessionError> {
        (**self).read_coordinates(turn)
    }

    fn reject(&mut self, rejection: Rejection) -> Result<(), SessionError> {
        (**self).reject(rejection)
    }

    fn observe(&mut self, event: &GameEvent, board: &Board) -> Result<(), SessionError> {
        (**self).observe(event, board)
    }
}

/// A human seat: asks its input for coordinates until they resolve.
#[derive(Debug)]
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: MoveInput> HumanPlayer<I> {
    /// Creates a human seat reading from `input`.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Consumes the seat, returning the input.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: MoveInput> MoveSource for HumanPlayer<I> {
    #[instrument(skip(self, turn), fields(mark = %turn.mark(), player = %turn.name()))]
    fn next_move(&mut self, turn: &Turn<'_>) -> Result<usize, SessionError> {
        loop {
            let (row, col) = self.input.read_coordinates(turn)?;
            match resolve(&row, &col, turn.board()) {
                Ok(index) => return Ok(index),
                Err(rejection) => {
                    debug!(%rejection, "Move rejected");
                    self.input.reject(rejection)?;
                }
            }
        }
    }

    fn observe(&mut self, event: &GameEvent, board: &Board) -> Result<(), SessionError> {
        self.input.observe(event, board)
    }
}
