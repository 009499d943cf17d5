//! Line-based terminal I/O.

use crate::render::render_board;
use std::io::{BufRead, Write};
use tictactoe_core::{
    Board, GameEvent, MoveInput, Rejection, Seat, SessionError, Turn, coordinates,
};
use tracing::{debug, instrument};

/// Prompts and reads whole lines over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pause: bool,
    retrying: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. With `pause` off, acknowledgement prompts are skipped.
    pub fn new(input: R, output: W, pause: bool) -> Self {
        Self {
            input,
            output,
            pause,
            retrying: false,
        }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Reads one line without its terminator.
    ///
    /// End of input is [`SessionError::InputClosed`]. Bytes that are not
    /// UTF-8 are replaced, so the answer is refused like any other typo.
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("Input exhausted");
            return Err(SessionError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Writes `text` without a newline and reads the answer.
    pub fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Waits for Enter, unless pausing is disabled.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        if self.pause {
            self.prompt("Press Enter to continue...")?;
        }
        Ok(())
    }

    /// Draws the board.
    pub fn show_board(&mut self, board: &Board) -> Result<(), SessionError> {
        let text = render_board(board);
        self.say("")?;
        self.say(&text)?;
        self.say("")
    }
}

impl<R: BufRead, W: Write> MoveInput for Console<R, W> {
    #[instrument(skip(self, turn), fields(mark = %turn.mark()))]
    fn read_coordinates(&mut self, turn: &Turn<'_>) -> Result<(String, String), SessionError> {
        if !self.retrying {
            self.show_board(turn.board())?;
            self.say(&format!("{}'s turn ({})", turn.name(), turn.mark()))?;
        }
        self.retrying = false;
        let row = self.prompt("Choose a row (1-3): ")?;
        let col = self.prompt("Choose a column (1-3): ")?;
        Ok((row, col))
    }

    fn reject(&mut self, rejection: Rejection) -> Result<(), SessionError> {
        self.retrying = true;
        self.say(&format!("❌ {rejection}"))
    }

    fn observe(&mut self, event: &GameEvent, _board: &Board) -> Result<(), SessionError> {
        match *event {
            GameEvent::MovePlayed {
                mark,
                index,
                seat: Seat::Computer,
            } => {
                let (row, col) = coordinates(index);
                self.say(&format!(
                    "🤖 Computer placed {mark} at row {row}, column {col}"
                ))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_core::{HumanPlayer, Mark, MoveSource};

    fn console(input: &str, pause: bool) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), pause)
    }

    fn written(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut c = console(" Ann \r\nBob\nlast", false);
        assert_eq!(c.read_line().unwrap(), " Ann ");
        assert_eq!(c.read_line().unwrap(), "Bob");
        assert_eq!(c.read_line().unwrap(), "last");
        assert_eq!(c.read_line(), Err(SessionError::InputClosed));
    }

    #[test]
    fn test_read_line_tolerates_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"\xff\n3\n".to_vec()), Vec::new(), false);
        assert_eq!(c.read_line().unwrap(), "\u{FFFD}");
        assert_eq!(c.read_line().unwrap(), "3");
    }

    #[test]
    fn test_prompt_writes_text() {
        let mut c = console("2\n", false);
        assert_eq!(c.prompt("Pick: ").unwrap(), "2");
        assert_eq!(written(&c), "Pick: ");
    }

    #[test]
    fn test_pause_consumes_a_line() {
        let mut c = console("\nnext\n", true);
        c.pause().unwrap();
        assert_eq!(c.read_line().unwrap(), "next");
        assert!(written(&c).contains("Press Enter"));
    }

    #[test]
    fn test_pause_disabled_reads_nothing() {
        let mut c = console("next\n", false);
        c.pause().unwrap();
        assert_eq!(c.read_line().unwrap(), "next");
        assert!(written(&c).is_empty());
    }

    #[test]
    fn test_rejection_skips_board_redraw() {
        let mut c = console("a\n1\n2\n2\n", false);
        let board = Board::new();
        let turn = Turn::new(&board, Mark::X, "Ann");

        let index = HumanPlayer::new(&mut c).next_move(&turn);
        assert_eq!(index, Ok(4));

        let out = written(&c);
        assert_eq!(out.matches('╔').count(), 1);
        assert_eq!(out.matches("Ann's turn (X)").count(), 1);
        assert!(out.contains("❌ Please enter numbers!"));
        assert_eq!(out.matches("Choose a row").count(), 2);
    }

    #[test]
    fn test_computer_moves_are_announced() {
        let mut c = console("", false);
        let board = Board::new();
        let computer_move = GameEvent::MovePlayed {
            mark: Mark::O,
            index: 5,
            seat: Seat::Computer,
        };
        let human_move = GameEvent::MovePlayed {
            mark: Mark::X,
            index: 0,
            seat: Seat::Human,
        };
        c.observe(&human_move, &board).unwrap();
        c.observe(&computer_move, &board).unwrap();
        assert_eq!(written(&c), "🤖 Computer placed O at row 2, column 3\n");
    }
}
