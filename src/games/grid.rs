//! Grid addressing shared by both games.
//!
//! Boards are addressed by 0-based [`Position`]s internally and by
//! 1-based `row,col` text at the console. [`parse_position`] is the
//! single place where that text is turned into a position.

use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeSet;
use tracing::instrument;

/// A cell on a board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position from 0-based coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this position on a grid with `cols` columns.
    pub fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Displays 1-based, the way players type it.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

/// Size of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Creates dimensions of `rows` by `cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Square dimensions of `n` by `n`.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Number of cells.
    pub fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the position lies on the grid.
    pub fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// All positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

/// Positions currently eligible for play.
///
/// Ordered so that seeded random selection is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSet {
    moves: BTreeSet<Position>,
}

impl MoveSet {
    /// Creates a move set holding every position of the grid.
    #[instrument]
    pub fn full(dims: Dimensions) -> Self {
        Self {
            moves: dims.positions().collect(),
        }
    }

    /// Returns true if the position is playable.
    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains(&pos)
    }

    /// Removes a position, returning whether it was present.
    pub fn remove(&mut self, pos: Position) -> bool {
        self.moves.remove(&pos)
    }

    /// Adds a position back, returning whether it was absent.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.moves.insert(pos)
    }

    /// Number of playable positions.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true once nothing is left to play.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates playable positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.iter().copied()
    }

    /// Draws a playable position uniformly at random.
    #[instrument(skip(self, rng), fields(remaining = self.moves.len()))]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.iter().choose(rng)
    }
}

/// Error turning console text into a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// Not two comma-separated numbers.
    #[display("try again, invalid input (expected row,column)")]
    InvalidFormat,

    /// Numbers given, but off the board.
    #[display("try again, out of range (rows 1-{}, columns 1-{})", _0.rows, _0.cols)]
    OutOfRange(Dimensions),
}

impl std::error::Error for CoordinateError {}

/// Parses 1-based `row,col` text into a position on a grid.
///
/// At least two tokens are required and every token must be a
/// non-empty run of ASCII digits. Tokens after the second are checked
/// but otherwise ignored.
#[instrument]
pub fn parse_position(input: &str, dims: Dimensions) -> Result<Position, CoordinateError> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() < 2
        || tokens
            .iter()
            .any(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(CoordinateError::InvalidFormat);
    }

    let to_index = |token: &str| -> Option<usize> { token.parse::<usize>().ok()?.checked_sub(1) };
    let (row, col) = match (to_index(tokens[0]), to_index(tokens[1])) {
        (Some(row), Some(col)) => (row, col),
        _ => return Err(CoordinateError::OutOfRange(dims)),
    };

    let pos = Position::new(row, col);
    if !dims.contains(pos) {
        return Err(CoordinateError::OutOfRange(dims));
    }
    Ok(pos)
}
