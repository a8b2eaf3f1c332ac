//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::is_winner;
use tracing::instrument;

/// Checks for a tie after `mark` has moved.
///
/// A tie needs an empty move set and no line for the player who just
/// moved.
#[instrument(skip(board), fields(remaining = board.moves().len()))]
pub fn is_tie(board: &Board, mark: Mark) -> bool {
    board.moves().is_empty() && !is_winner(board, mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::Position;

    fn fill(board: &mut Board, rows: [[Mark; 3]; 3]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                board.place(Position::new(r, c), *mark);
            }
        }
    }

    #[test]
    fn test_empty_board_not_tie() {
        let board = Board::new(3);
        assert!(!is_tie(&board, Mark::X));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let mut board = Board::new(3);
        board.place(Position::new(1, 1), Mark::X);
        assert!(!is_tie(&board, Mark::X));
    }

    #[test]
    fn test_tie_detection() {
        use Mark::{O, X};
        let mut board = Board::new(3);
        // X O X / O X X / O X O
        fill(&mut board, [[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_tie(&board, X));
    }

    #[test]
    fn test_full_board_with_winner_not_tie() {
        use Mark::{O, X};
        let mut board = Board::new(3);
        // X X X / O O X / X O O
        fill(&mut board, [[X, X, X], [O, O, X], [X, O, O]]);
        assert!(!is_tie(&board, X));
    }
}
