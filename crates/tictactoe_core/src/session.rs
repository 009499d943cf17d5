//! One play-through from an empty board to a win or draw.
//!
//! A [`GameSession`] is a two-state machine:
//!
//! - `AwaitingMove(mark)`: the seat bound to `mark` supplies an index.
//! - `Finished(outcome)`: terminal. A fresh session starts the next game.
//!
//! In single-player mode O is always the computer seat; every other turn
//! goes to the human seat.

use crate::board::Board;
use crate::computer::COMPUTER_NAME;
use crate::leaderboard::Leaderboard;
use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Mode {
    /// One human (X) against the computer (O).
    #[display("Single player")]
    SinglePlayer,
    /// Two humans sharing the terminal.
    #[display("Two players")]
    TwoPlayer,
}

/// What supplies the moves for a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Typed row/column input.
    Human,
    /// [`ComputerPlayer`](crate::ComputerPlayer).
    Computer,
}

/// Names bound to each mark for one session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionConfig {
    /// Single or two player.
    mode: Mode,
    /// Name bound to X.
    player_x: String,
    /// Name bound to O.
    player_o: String,
}

impl SessionConfig {
    /// A human named `name` plays X against the computer.
    pub fn single_player(name: impl Into<String>) -> Self {
        Self {
            mode: Mode::SinglePlayer,
            player_x: name.into(),
            player_o: COMPUTER_NAME.to_string(),
        }
    }

    /// Two humans; the first plays X.
    pub fn two_player(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            mode: Mode::TwoPlayer,
            player_x: player_x.into(),
            player_o: player_o.into(),
        }
    }
}

/// Result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The mark completed a winning line.
    Win(Mark),
    /// The board filled with no winning line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting on the seat bound to this mark.
    AwaitingMove(Mark),
    /// Terminal.
    Finished(Outcome),
}

/// Errors that end a session early.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The input stream ended.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[display("I/O error: {message}")]
    Io {
        /// Underlying error text.
        message: String,
    },

    /// A seat produced an index that is out of range or taken.
    #[display("Illegal move at index {index}")]
    IllegalMove {
        /// Offending index.
        index: usize,
    },

    /// A move was applied after the session finished.
    #[display("Game is already over")]
    AlreadyFinished,

    /// The computer was asked to move on a full board.
    #[display("No empty cell left for the computer")]
    NoMovesAvailable,
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Everything a seat may look at when choosing a move.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    board: &'a Board,
    mark: Mark,
    name: &'a str,
}

impl<'a> Turn<'a> {
    /// Describes `name` about to play `mark` on `board`.
    pub fn new(board: &'a Board, mark: Mark, name: &'a str) -> Self {
        Self { board, mark, name }
    }

    /// Board before the move.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Mark being played.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Name bound to the mark.
    pub fn name(&self) -> &'a str {
        self.name
    }
}

/// Anything that can pick the next index for a turn.
pub trait MoveSource {
    /// Returns the index (0-8) to play.
    fn next_move(&mut self, turn: &Turn<'_>) -> Result<usize, SessionError>;

    /// Called with every event of the session, after the board changed.
    fn observe(&mut self, _event: &GameEvent, _board: &Board) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Progress reported by [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MovePlayed {
        /// Who moved.
        mark: Mark,
        /// Where (0-8).
        index: usize,
        /// Which kind of seat produced the move.
        seat: Seat,
    },
    /// The session reached a terminal state.
    Finished(Outcome),
}

/// One play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    state: SessionState,
    history: Vec<usize>,
}

impl GameSession {
    /// Starts a session on a cleared board with X to move.
    #[instrument(skip(config), fields(mode = %config.mode))]
    pub fn new(config: SessionConfig) -> Self {
        let mut board = Board::new();
        board.reset();
        info!(x = %config.player_x, o = %config.player_o, "Session started");
        Self {
            config,
            board,
            state: SessionState::AwaitingMove(Mark::X),
            history: Vec::new(),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the outcome once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Finished(outcome) => Some(outcome),
            SessionState::AwaitingMove(_) => None,
        }
    }

    /// Name bound to `mark`.
    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.config.player_x,
            Mark::O => &self.config.player_o,
        }
    }

    /// Seat that moves for `mark` under this session's mode.
    pub fn seat_for(&self, mark: Mark) -> Seat {
        match (self.config.mode, mark) {
            (Mode::SinglePlayer, Mark::O) => Seat::Computer,
            _ => Seat::Human,
        }
    }

    /// Places the current mark at `index` and advances the state.
    ///
    /// A win is recorded in `leaderboard` under the winner's name. An
    /// illegal index leaves board, turn and leaderboard untouched.
    #[instrument(skip(self, leaderboard))]
    pub fn apply_move(
        &mut self,
        index: usize,
        leaderboard: &mut Leaderboard,
    ) -> Result<SessionState, SessionError> {
        let mark = match self.state {
            SessionState::AwaitingMove(mark) => mark,
            SessionState::Finished(_) => return Err(SessionError::AlreadyFinished),
        };

        if !self.board.is_empty(index) {
            warn!(index, "Rejected illegal move");
            return Err(SessionError::IllegalMove { index });
        }

        self.board.place(index, mark);
        self.history.push(index);
        debug!(%mark, index, "Move applied");

        self.state = if self.board.has_winner() {
            let winner = self.name_for(mark).to_string();
            info!(%mark, %winner, moves = self.history.len(), "Session won");
            leaderboard.record_win(&winner);
            SessionState::Finished(Outcome::Win(mark))
        } else if self.board.is_full() {
            info!("Session drawn");
            SessionState::Finished(Outcome::Draw)
        } else {
            SessionState::AwaitingMove(mark.opponent())
        };

        Ok(self.state)
    }

    /// Drives turns until the session finishes.
    ///
    /// `human` answers every human seat (both marks in two-player mode);
    /// `computer` answers O in single-player mode. Both seats observe each
    /// move and the final outcome.
    #[instrument(skip_all, fields(mode = %self.config.mode))]
    pub fn play(
        &mut self,
        human: &mut dyn MoveSource,
        computer: &mut dyn MoveSource,
        leaderboard: &mut Leaderboard,
    ) -> Result<Outcome, SessionError> {
        loop {
            let mark = match self.state {
                SessionState::Finished(outcome) => {
                    let event = GameEvent::Finished(outcome);
                    human.observe(&event, &self.board)?;
                    computer.observe(&event, &self.board)?;
                    return Ok(outcome);
                }
                SessionState::AwaitingMove(mark) => mark,
            };

            let seat = self.seat_for(mark);
            let turn = Turn::new(&self.board, mark, self.name_for(mark));
            let index = match seat {
                Seat::Human => human.next_move(&turn)?,
                Seat::Computer => computer.next_move(&turn)?,
            };

            self.apply_move(index, leaderboard)?;
            let event = GameEvent::MovePlayed { mark, index, seat };
            human.observe(&event, &self.board)?;
            computer.observe(&event, &self.board)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn play_indices(session: &mut GameSession, moves: &[usize], leaderboard: &mut Leaderboard) {
        for &index in moves {
            session.apply_move(index, leaderboard).expect("legal move");
        }
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        assert_eq!(session.state(), SessionState::AwaitingMove(Mark::X));
        assert_eq!(session.board().empty_indices().len(), 9);
        assert!(session.history().is_empty());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_marks_alternate() {
        let mut leaderboard = Leaderboard::new();
        let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        assert_eq!(
            session.apply_move(4, &mut leaderboard),
            Ok(SessionState::AwaitingMove(Mark::O))
        );
        assert_eq!(
            session.apply_move(0, &mut leaderboard),
            Ok(SessionState::AwaitingMove(Mark::X))
        );
        assert_eq!(session.board().get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(session.board().get(0), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut leaderboard = Leaderboard::new();
        let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        session.apply_move(4, &mut leaderboard).unwrap();
        let before = session.board().clone();

        assert_eq!(
            session.apply_move(4, &mut leaderboard),
            Err(SessionError::IllegalMove { index: 4 })
        );
        assert_eq!(
            session.apply_move(9, &mut leaderboard),
            Err(SessionError::IllegalMove { index: 9 })
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.state(), SessionState::AwaitingMove(Mark::O));
        assert_eq!(session.history(), &[4]);
    }

    #[test]
    fn test_win_records_leaderboard() {
        let mut leaderboard = Leaderboard::new();
        let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        play_indices(&mut session, &[0, 3, 1, 4, 2], &mut leaderboard);
        assert_eq!(session.outcome(), Some(Outcome::Win(Mark::X)));
        assert_eq!(leaderboard.wins("ann"), 1);
        assert_eq!(leaderboard.wins("bob"), 0);
        assert_eq!(
            session.apply_move(8, &mut leaderboard),
            Err(SessionError::AlreadyFinished)
        );
    }

    #[test]
    fn test_draw_leaves_leaderboard_alone() {
        let mut leaderboard = Leaderboard::new();
        let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        play_indices(&mut session, &[0, 2, 1, 3, 5, 4, 6, 7, 8], &mut leaderboard);
        assert_eq!(session.outcome(), Some(Outcome::Draw));
        assert!(leaderboard.is_empty());
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut leaderboard = Leaderboard::new();
        let mut session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        // X O X / O X O / O X X -> X completes the main diagonal on the ninth move
        play_indices(&mut session, &[0, 1, 2, 3, 4, 5, 7, 6, 8], &mut leaderboard);
        assert_eq!(session.outcome(), Some(Outcome::Win(Mark::X)));
        assert_eq!(leaderboard.wins("Ann"), 1);
    }

    #[test]
    fn test_single_player_binds_computer() {
        let session = GameSession::new(SessionConfig::single_player("Ann"));
        assert_eq!(session.name_for(Mark::X), "Ann");
        assert_eq!(session.name_for(Mark::O), COMPUTER_NAME);
        assert_eq!(session.seat_for(Mark::X), Seat::Human);
        assert_eq!(session.seat_for(Mark::O), Seat::Computer);
    }

    #[test]
    fn test_two_player_all_human() {
        let session = GameSession::new(SessionConfig::two_player("Ann", "Bob"));
        assert_eq!(session.seat_for(Mark::X), Seat::Human);
        assert_eq!(session.seat_for(Mark::O), Seat::Human);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert!(!Outcome::Win(Mark::O).is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
    }
}
