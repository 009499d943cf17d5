//! The 3x3 grid and pure queries over it.
//!
//! Cells are stored in row-major order, `index = row * 3 + col` (0-based).
//! The board performs no move validation: callers go through
//! [`resolve`](crate::resolve) or [`ComputerPlayer`](crate::ComputerPlayer)
//! first, so [`Board::place`] only ever sees an in-range, empty index.

use crate::types::{Mark, Square};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 8 lines that win the game.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Writes `mark` into `index`.
    ///
    /// The index must be in `0..9` and currently empty.
    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_empty(index), "place on taken or missing cell {index}");
        self.squares[index] = Square::Occupied(mark);
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns the mark that completed a winning line, if any.
    pub fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            match (self.squares[a], self.squares[b], self.squares[c]) {
                (Square::Occupied(p1), Square::Occupied(p2), Square::Occupied(p3))
                    if p1 == p2 && p2 == p3 =>
                {
                    Some(p1)
                }
                _ => None,
            }
        })
    }

    /// True iff some winning line holds three equal marks.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Indices of empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.squares[i] == Square::Empty).collect()
    }
}

/// Converts a board index into 1-based `(row, col)`.
pub fn coordinates(index: usize) -> (usize, usize) {
    (index / 3 + 1, index % 3 + 1)
}
