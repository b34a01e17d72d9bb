//! History invariant: a finished game is always logged.

use super::super::GameState;
use super::Invariant;

/// Invariant: when the current game has an outcome, it is the newest history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.outcome() {
            Some(outcome) => state.history().last() == Some(&outcome),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Current outcome is the last history entry"
    }
}
