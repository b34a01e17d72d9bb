//! Moves and the errors that reject them.
//!
//! Every rejection leaves the engine untouched. Callers that only care about
//! the board can drop the error and treat the call as a no-op.

use super::{Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// A CPU move that has been chosen but not yet placed.
///
/// Issued by [`GameEngine::begin_cpu_move`](super::GameEngine::begin_cpu_move)
/// and redeemed by `commit_cpu_move`. The generation ties the ticket to the
/// game it was drawn for; a reset in between makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuMove {
    pub(crate) action: Move,
    pub(crate) generation: u64,
}

impl CpuMove {
    /// The move the CPU will make.
    pub fn action(&self) -> Move {
        self.action
    }

    /// Board index of the chosen cell.
    pub fn index(&self) -> usize {
        self.action.position.to_index()
    }
}

/// Why a move could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square is already taken.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// No empty square left to pick from.
    #[display("No empty squares left")]
    NoEmptyCells,
}

/// Error returned by engine operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum GameError {
    /// The move itself is not playable.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(#[error(not(source))] InvalidMove),

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Reset requested before the game ended.
    #[display("Game has not ended yet")]
    NotTerminal,

    /// Setup change attempted after the first move of a game.
    #[display("Game is in progress; finish it before changing setup")]
    GameInProgress,

    /// A CPU move is already pending.
    #[display("CPU is thinking")]
    CpuThinking,

    /// The human tried to move for the CPU's symbol.
    #[display("It's {}'s turn (CPU)", _0)]
    NotYourTurn(#[error(not(source))] Symbol),

    /// CPU move requested with the CPU disabled or no symbol chosen.
    #[display("CPU opponent is not enabled")]
    CpuDisabled,

    /// CPU move requested on the human's turn.
    #[display("It is not the CPU's turn")]
    NotCpuTurn,

    /// CPU move requested on a blank board; the human always opens.
    #[display("CPU never makes the opening move")]
    CpuCannotOpen,

    /// A CPU move drawn for a game that has since been reset.
    #[display("CPU move belongs to a previous game")]
    StaleCpuMove,
}
