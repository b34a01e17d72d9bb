//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game marker placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Symbol O (moves first unless the player picks X).
    #[default]
    O,
    /// Symbol X.
    X,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::O => Symbol::X,
            Symbol::X => Symbol::O,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol on this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns true when no symbol has been placed yet.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices (0-8) of the empty squares, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of squares holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(symbol))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Result of a finished game, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A symbol completed a line.
    #[display("{} won", _0)]
    Won(Symbol),
    /// The board filled up with no line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Snapshot of everything the engine tracks for one session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Symbol,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) player_choice: Option<Symbol>,
    pub(crate) cpu_enabled: bool,
    pub(crate) cpu_moving: bool,
    pub(crate) history: Vec<Outcome>,
}

impl GameState {
    /// Creates the state a session starts in: empty board, O to move, no choice.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol to move next.
    pub fn turn(&self) -> Symbol {
        self.turn
    }

    /// Outcome of the current game, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Winner of the current game.
    pub fn winner(&self) -> Option<Symbol> {
        self.outcome.and_then(|o| o.winner())
    }

    /// True if the current game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_draw())
    }

    /// True once a winner or a draw has been recorded.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The symbol the human picked.
    pub fn player_choice(&self) -> Option<Symbol> {
        self.player_choice
    }

    /// Symbol the CPU plays: the one the human did not pick.
    pub fn cpu_symbol(&self) -> Option<Symbol> {
        self.player_choice.map(Symbol::opponent)
    }

    /// Whether the CPU opponent is enabled.
    pub fn cpu_enabled(&self) -> bool {
        self.cpu_enabled
    }

    /// True while a CPU move has been chosen but not yet committed.
    pub fn cpu_moving(&self) -> bool {
        self.cpu_moving
    }

    /// Outcomes of every finished game in this session, oldest first.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// Symbol that opens each game.
    pub fn opener(&self) -> Symbol {
        self.player_choice.unwrap_or_default()
    }
}
