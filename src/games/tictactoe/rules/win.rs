//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use crate::games::grid::Position;
use tracing::instrument;

/// Every row, every column and both diagonals of an n×n board.
fn lines(size: usize) -> impl Iterator<Item = Vec<Position>> {
    let rows = (0..size).map(move |row| -> Vec<Position> {
        (0..size).map(|col| Position::new(row, col)).collect()
    });
    let cols = (0..size).map(move |col| -> Vec<Position> {
        (0..size).map(|row| Position::new(row, col)).collect()
    });
    let diagonal: Vec<Position> = (0..size).map(|i| Position::new(i, i)).collect();
    let anti_diagonal: Vec<Position> = (0..size).map(|i| Position::new(i, size - 1 - i)).collect();
    rows.chain(cols).chain([diagonal, anti_diagonal])
}

/// Returns true if some line is filled entirely with `mark`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    lines(board.size()).any(|line| {
        line.iter()
            .all(|&pos| board.get(pos) == Some(Square::Occupied(mark)))
    })
}

/// Returns the mark owning a complete line, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    <Mark as strum::IntoEnumIterator>::iter().find(|&mark| is_winner(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, cells: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, mark) in cells {
            board.place(Position::new(row, col), mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert!(is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(3, &[(0, 1, Mark::O), (1, 1, Mark::O), (2, 1, Mark::O)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(3, &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal_on_larger_board() {
        let board = board_with(
            4,
            &[(0, 3, Mark::X), (1, 2, Mark::X), (2, 1, Mark::X), (3, 0, Mark::X)],
        );
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }
}
