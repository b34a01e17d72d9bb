//! Tic-tac-toe engine with an optional random CPU opponent.
//!
//! # Architecture
//!
//! - **Engine**: synchronous state machine for one session ([`GameEngine`])
//! - **Session**: async wrapper that plays the CPU's move after a delay ([`GameSession`])
//! - **Config**: TOML settings for the session ([`GameConfig`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Symbol};
//!
//! let mut engine = GameEngine::new();
//! engine.select_symbol(Symbol::O).unwrap();
//! for index in [0, 1, 3, 4, 6] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(engine.state().winner(), Some(Symbol::O));
//! assert_eq!(engine.state().history(), &[Outcome::Won(Symbol::O)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CpuMove, GameEngine, GameError, GameState, InvalidMove, Move, Outcome, Position,
    Square, Symbol, invariants, rules,
};
