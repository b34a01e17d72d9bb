//! Balanced board invariant: symbols are placed one after the other.

use super::super::{GameState, Symbol};
use super::Invariant;

/// Invariant: the O and X counts differ by at most one.
pub struct BalancedBoardInvariant;

impl Invariant<GameState> for BalancedBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let o = state.board().count(Symbol::O);
        let x = state.board().count(Symbol::X);
        o.abs_diff(x) <= 1
    }

    fn description() -> &'static str {
        "Symbol counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_one_ahead_holds() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Symbol::O));
        assert!(BalancedBoardInvariant::holds(&state));
    }

    #[test]
    fn test_two_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Symbol::O));
        state.board.set(Position::TopLeft, Square::Occupied(Symbol::O));
        assert!(!BalancedBoardInvariant::holds(&state));
    }
}
