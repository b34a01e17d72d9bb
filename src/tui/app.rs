//! Application state and key handling.

use super::input::{self, Command};
use tictactoe_engine::{GameError, GameSession, GameState, Position, Symbol};
use tracing::{debug, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Symbol choice and CPU toggle.
    Setup,
    /// The board.
    Board,
}

/// Main application state.
pub struct App {
    session: GameSession,
    screen: Screen,
    cursor: Position,
    choice: Symbol,
    cpu: bool,
    message: Option<String>,
    quit: bool,
}

impl App {
    /// Creates the app on the setup screen, preselecting whatever the session already has.
    pub fn new(session: GameSession) -> Self {
        let state = session.snapshot();
        Self {
            choice: state.player_choice().unwrap_or_default(),
            cpu: state.cpu_enabled(),
            session,
            screen: Screen::Setup,
            cursor: Position::Center,
            message: None,
            quit: false,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.session.snapshot()
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Symbol highlighted on the setup screen.
    pub fn choice(&self) -> Symbol {
        self.choice
    }

    /// CPU toggle on the setup screen.
    pub fn cpu(&self) -> bool {
        self.cpu
    }

    /// Last rejection, shown under the board until the next key.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, command: Command) {
        self.message = None;
        if command == Command::Quit {
            self.quit = true;
            return;
        }
        let result = match self.screen {
            Screen::Setup => self.handle_setup(command),
            Screen::Board => self.handle_board(command),
        };
        if let Err(e) = result {
            debug!(error = %e, "Command rejected");
            self.message = Some(e.to_string());
        }
    }

    fn handle_setup(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Choose(symbol) => self.choice = symbol,
            Command::ToggleCpu => self.cpu = !self.cpu,
            Command::Start => {
                self.session.set_cpu_enabled(self.cpu)?;
                self.session.select_symbol(self.choice)?;
                self.screen = Screen::Board;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_board(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::Start | Command::PlaceAtCursor => {
                self.session.apply_move(self.cursor.to_index())?;
            }
            Command::PlaceAt(index) => {
                self.session.apply_move(index)?;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
            }
            Command::Reset => {
                self.session.reset()?;
            }
            Command::Setup => {
                let state = self.state();
                if !state.board().is_blank() && !state.is_over() {
                    return Err(GameError::GameInProgress);
                }
                self.screen = Screen::Setup;
            }
            _ => {}
        }
        Ok(())
    }
}
