//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed
//! which mark where and are kept as the game's history.

use super::Mark;
use crate::games::grid::{CoordinateError, Position};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input did not name a square on the board.
    #[display("{}", _0)]
    Coordinate(CoordinateError),

    /// The square at the position is already occupied.
    #[display("occupied, try again ({} is taken)", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl From<CoordinateError> for MoveError {
    fn from(err: CoordinateError) -> Self {
        MoveError::Coordinate(err)
    }
}
