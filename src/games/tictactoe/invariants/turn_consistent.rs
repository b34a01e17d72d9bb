//! Turn invariant: the symbol to move follows from the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: while a game is in play, the opener moves on equal counts and
/// the other symbol moves when the opener is one ahead.
///
/// Finished games are exempt; the turn is meaningless until the next reset.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_over() {
            return true;
        }
        let opener = state.opener();
        let opener_count = state.board().count(opener);
        let other_count = state.board().count(opener.opponent());
        if opener_count == other_count {
            state.turn() == opener
        } else {
            state.turn() == opener.opponent()
        }
    }

    fn description() -> &'static str {
        "Turn alternates starting from the opener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square, Symbol};

    #[test]
    fn test_fresh_state_holds() {
        assert!(TurnConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_opener_moving_twice_violates() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Symbol::O));
        assert!(!TurnConsistentInvariant::holds(&state));
        state.turn = Symbol::X;
        assert!(TurnConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_chosen_symbol_opens() {
        let mut state = GameState::new();
        state.player_choice = Some(Symbol::X);
        state.turn = Symbol::X;
        assert!(TurnConsistentInvariant::holds(&state));
    }
}
