//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square, Symbol};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows first, then the two diagonals, then the columns. Only one line can be
/// complete in a legal game, but the order keeps the result deterministic.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` for the first line in [`LINES`] holding three of the
/// same symbol, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).symbol())
}

/// Returns the first complete line, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(i, symbol) in cells {
            board.set(Position::ALL[i], Square::Occupied(symbol));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X)]);
        assert_eq!(check_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Symbol::O), (4, Symbol::O), (6, Symbol::O)]);
        assert_eq!(check_winner(&board), Some(Symbol::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, Symbol::O), (4, Symbol::O), (7, Symbol::O)]);
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in play, but the scan order decides.
        let board = board_with(&[
            (0, Symbol::X),
            (1, Symbol::X),
            (2, Symbol::X),
            (6, Symbol::O),
            (7, Symbol::O),
            (8, Symbol::O),
        ]);
        assert_eq!(check_winner(&board), Some(Symbol::X));
    }
}
