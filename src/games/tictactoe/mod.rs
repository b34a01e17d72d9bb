mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{CpuMove, GameError, InvalidMove, Move};
pub use engine::GameEngine;
pub use position::Position;
pub use types::{Board, GameState, Outcome, Square, Symbol};
