//! Keyboard handling: cursor movement and key-to-command mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::{Position, Symbol};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a board index (0-8).
    PlaceAt(usize),
    /// Pick a symbol on the setup screen.
    Choose(Symbol),
    /// Flip the CPU opponent on the setup screen.
    ToggleCpu,
    /// Confirm the setup screen.
    Start,
    /// Start the next game.
    Reset,
    /// Return to the setup screen.
    Setup,
}

/// Maps a key to a command.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Command::PlaceAt(d as usize - 1)),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Command::Choose(Symbol::O)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Choose(Symbol::X)),
        KeyCode::Char('c') => Some(Command::ToggleCpu),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('s') => Some(Command::Setup),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
