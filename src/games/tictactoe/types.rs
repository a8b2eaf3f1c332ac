//! Core domain types for tic-tac-toe.

use crate::games::grid::{Dimensions, MoveSet, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a mark from player input, ignoring case and surrounding space.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Square n×n tic-tac-toe board.
///
/// The board owns the set of empty squares so that placement and
/// move-set bookkeeping can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
    moves: MoveSet,
}

impl Board {
    /// Creates an empty board of `size` by `size`.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let dims = Dimensions::square(size);
        Self {
            size,
            squares: vec![Square::Empty; dims.area()],
            moves: MoveSet::full(dims),
        }
    }

    /// Length of a side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Dimensions of the board.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::square(self.size)
    }

    /// Gets the square at a position, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if !self.dimensions().contains(pos) {
            return None;
        }
        self.squares.get(pos.index(self.size)).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Squares that are still empty.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Puts a mark on an empty square and removes it from the move set.
    ///
    /// Callers validate first; placing on a taken or off-board square
    /// leaves the board untouched and returns false.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.squares[pos.index(self.size)] = Square::Occupied(mark);
        self.moves.remove(pos);
        true
    }

    /// Formats the board with 1-based row and column headers.
    pub fn display(&self) -> String {
        let mut result = String::from(" ");
        for col in 1..=self.size {
            result.push_str(&format!(" {col}"));
        }
        for row in 0..self.size {
            result.push_str(&format!("\n{}", row + 1));
            for col in 0..self.size {
                let symbol = match self.squares[Position::new(row, col).index(self.size)] {
                    Square::Empty => "_".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push(' ');
                result.push_str(&symbol);
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Every square is taken and nobody won.
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_removes_from_move_set() {
        let mut board = Board::new(3);
        let pos = Position::new(1, 2);
        assert!(board.place(pos, Mark::X));
        assert_eq!(board.get(pos), Some(Square::Occupied(Mark::X)));
        assert!(!board.moves().contains(pos));
        assert_eq!(board.moves().len(), 8);
    }

    #[test]
    fn test_place_on_taken_square_is_refused() {
        let mut board = Board::new(3);
        let pos = Position::new(0, 0);
        board.place(pos, Mark::X);
        assert!(!board.place(pos, Mark::O));
        assert_eq!(board.get(pos), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new(3);
        board.place(Position::new(0, 0), Mark::X);
        board.place(Position::new(2, 1), Mark::O);
        assert_eq!(board.display(), "  1 2 3\n1 X _ _\n2 _ _ _\n3 _ O _");
    }

    #[test]
    fn test_mark_from_input() {
        assert_eq!(Mark::from_input("x"), Some(Mark::X));
        assert_eq!(Mark::from_input(" O "), Some(Mark::O));
        assert_eq!(Mark::from_input("z"), None);
    }
}
