//! Game engine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules::{is_tie, is_winner};
use super::types::{Board, GameStatus, Mark};
use crate::games::grid::{CoordinateError, Position, parse_position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game: board, whose turn it is, and how it stands.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty `size` by `size` board.
    #[instrument]
    pub fn new(size: usize, first: Mark) -> Self {
        Self {
            board: Board::new(size),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Turns console text into a playable position.
    #[instrument(skip(self))]
    pub fn validate(&self, input: &str) -> Result<Position, MoveError> {
        let pos = parse_position(input, self.board.dimensions())?;
        self.check_square(pos)?;
        Ok(pos)
    }

    fn check_square(&self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.dimensions().contains(pos) {
            return Err(CoordinateError::OutOfRange(self.board.dimensions()).into());
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(())
    }

    /// Places the current mark and evaluates the board.
    ///
    /// The turn passes to the opponent only while the game goes on.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.check_square(pos)?;

        let mark = self.to_move;
        self.board.place(pos, mark);
        self.history.push(Move::new(mark, pos));
        debug!(%pos, remaining = self.board.moves().len(), "Mark placed");

        if is_winner(&self.board, mark) {
            info!(%mark, "Line completed");
            self.status = GameStatus::Won(mark);
        } else if is_tie(&self.board, mark) {
            info!("Board full without a winner");
            self.status = GameStatus::Tie;
        } else {
            self.to_move = mark.opponent();
        }
        Ok(self.status)
    }
}
