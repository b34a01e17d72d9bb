//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They hold no state, so the engine and the
//! invariant checks evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board after a move.
///
/// A winner takes precedence over a full board. `None` means play continues.
#[instrument(skip(board))]
pub fn terminal_check(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        Some(Outcome::Won(winner))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
