//! Outcome invariant: the recorded result matches the board.

use super::super::GameState;
use super::super::rules::terminal_check;
use super::Invariant;

/// Invariant: the stored outcome is exactly what the rules say about the board.
///
/// Rules out a winner and a draw at once, and a finished game going unnoticed.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == terminal_check(state.board())
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Outcome, Position, Square, Symbol};

    #[test]
    fn test_unrecorded_win_violates() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board.set(pos, Square::Occupied(Symbol::O));
        }
        assert!(!OutcomeConsistentInvariant::holds(&state));
        state.outcome = Some(Outcome::Won(Symbol::O));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }
}
