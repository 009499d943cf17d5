//! Menu loop: play, view the leaderboard, quit.

use crate::console::Console;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tictactoe_core::{
    COMPUTER_NAME, ComputerPlayer, GameSession, HumanPlayer, Leaderboard, Mode, Outcome,
    SessionConfig, SessionError,
};
use tracing::{debug, info, instrument};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Start a new session.
    Play,
    /// Show the leaderboard.
    ViewLeaderboard,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::ViewLeaderboard => "View Leaderboard",
            Self::Quit => "Quit",
        }
    }

    /// Maps `1`/`2`/`3` to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Play),
            "2" => Some(Self::ViewLeaderboard),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Maps `1`/`2` to a game mode.
pub fn parse_mode(input: &str) -> Option<Mode> {
    match input.trim() {
        "1" => Some(Mode::SinglePlayer),
        "2" => Some(Mode::TwoPlayer),
        _ => None,
    }
}

/// True for names that would share the computer's leaderboard entry.
pub fn is_reserved_name(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(COMPUTER_NAME)
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::SinglePlayer => "Single player (vs computer)",
        Mode::TwoPlayer => "Two players",
    }
}

/// The running program: owns the leaderboard and the computer opponent.
#[derive(Debug)]
pub struct App<R, W> {
    console: Console<R, W>,
    leaderboard: Leaderboard,
    computer: ComputerPlayer,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates the app with an empty leaderboard.
    pub fn new(console: Console<R, W>, computer: ComputerPlayer) -> Self {
        Self {
            console,
            leaderboard: Leaderboard::new(),
            computer,
        }
    }

    /// Returns the leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Returns the console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs the menu until Quit is chosen or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.menu_loop() {
            Err(SessionError::InputClosed) => {
                info!("Input closed, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), SessionError> {
        loop {
            match self.read_menu_choice()? {
                MenuChoice::Play => self.play_session()?,
                MenuChoice::ViewLeaderboard => self.show_leaderboard()?,
                MenuChoice::Quit => {
                    info!("Quit chosen");
                    return self.console.say("👋 Thanks for playing!");
                }
            }
        }
    }

    fn read_menu_choice(&mut self) -> Result<MenuChoice, SessionError> {
        self.console.say("")?;
        self.console.say("==============================")?;
        self.console.say("      🎮 TIC-TAC-TOE 🎮")?;
        self.console.say("==============================")?;
        for (n, choice) in MenuChoice::iter().enumerate() {
            self.console.say(&format!("{}. {}", n + 1, choice.label()))?;
        }
        loop {
            let answer = self.console.prompt("Choose an option (1-3): ")?;
            match MenuChoice::parse(&answer) {
                Some(choice) => {
                    debug!(?choice, "Menu choice");
                    return Ok(choice);
                }
                None => self.console.say("❌ Please choose 1, 2, or 3!")?,
            }
        }
    }

    fn read_mode(&mut self) -> Result<Mode, SessionError> {
        for (n, mode) in Mode::iter().enumerate() {
            self.console.say(&format!("{}. {}", n + 1, mode_label(mode)))?;
        }
        loop {
            let answer = self.console.prompt("Choose a mode (1-2): ")?;
            match parse_mode(&answer) {
                Some(mode) => return Ok(mode),
                None => self.console.say("❌ Please choose 1 or 2!")?,
            }
        }
    }

    fn read_name(&mut self, prompt: &str) -> Result<String, SessionError> {
        loop {
            let answer = self.console.prompt(prompt)?;
            let name = answer.trim();
            if name.is_empty() {
                self.console.say("❌ Name cannot be empty!")?;
            } else if is_reserved_name(name) {
                self.console.say("❌ That name belongs to the computer!")?;
            } else {
                return Ok(name.to_string());
            }
        }
    }

    #[instrument(skip(self))]
    fn play_session(&mut self) -> Result<(), SessionError> {
        let mode = self.read_mode()?;
        let config = match mode {
            Mode::SinglePlayer => SessionConfig::single_player(self.read_name("Enter your name: ")?),
            Mode::TwoPlayer => {
                let x = self.read_name("Enter name for Player 1 (X): ")?;
                let o = self.read_name("Enter name for Player 2 (O): ")?;
                SessionConfig::two_player(x, o)
            }
        };
        self.console.say(&format!(
            "{} is X, {} is O. X goes first!",
            config.player_x(),
            config.player_o()
        ))?;
        self.console.pause()?;

        let mut session = GameSession::new(config);
        let mut human = HumanPlayer::new(&mut self.console);
        let outcome = session.play(&mut human, &mut self.computer, &mut self.leaderboard)?;

        self.console.show_board(session.board())?;
        match outcome {
            Outcome::Win(mark) => self
                .console
                .say(&format!("🎉 {} ({}) wins! 🎉", session.name_for(mark), mark))?,
            Outcome::Draw => self.console.say("🤝 It's a draw! 🤝")?,
        }
        self.console.pause()
    }

    #[instrument(skip(self))]
    fn show_leaderboard(&mut self) -> Result<(), SessionError> {
        self.console.say("")?;
        self.console.say("🏆 LEADERBOARD 🏆")?;
        let entries = self.leaderboard.snapshot();
        if entries.is_empty() {
            self.console.say("No wins recorded yet.")?;
        }
        for (n, entry) in entries.iter().enumerate() {
            self.console.say(&format!("{}. {}", n + 1, entry))?;
        }
        self.console.pause()
    }
}
