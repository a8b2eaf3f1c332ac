//! Memory game state: board, seats, scores and whose turn it is.

use super::board::Board;
use crate::games::grid::{CoordinateError, Position, parse_position};
use crate::players::Contestant;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// A player and their score for the current game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Seat {
    /// Who sits here.
    player: Contestant,
    /// Pairs found this game.
    score: u32,
}

impl Seat {
    /// A seat with no pairs yet.
    pub fn new(player: Contestant) -> Self {
        Self { player, score: 0 }
    }

    /// Starts over at zero, keeping the player.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Error validating or applying a pick.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PickError {
    /// The input did not name a card on the board.
    #[display("{}", _0)]
    Coordinate(CoordinateError),

    /// Face-up or matched already.
    #[display("already flipped, try again ({} is showing)", _0)]
    AlreadyFlipped(Position),
}

impl std::error::Error for PickError {}

impl From<CoordinateError> for PickError {
    fn from(err: CoordinateError) -> Self {
        PickError::Coordinate(err)
    }
}

/// Error starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SeatingError {
    /// Nobody to take a turn.
    #[display("a game needs at least one player")]
    NoSeats,
}

impl std::error::Error for SeatingError {}

/// Result of turning over the second card of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Same pair: scored, and the same player goes again.
    Matched,
    /// Different pairs: both cards flipped back and the turn passes.
    Mismatched,
}

/// One game of memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryGame {
    board: Board,
    seats: Vec<Seat>,
    turn: usize,
}

impl MemoryGame {
    /// Starts a game with seat 1 to move.
    ///
    /// Scores carried in on the seats are reset.
    #[instrument(skip_all, fields(seats = seats.len()))]
    pub fn new(board: Board, mut seats: Vec<Seat>) -> Result<Self, SeatingError> {
        if seats.is_empty() {
            return Err(SeatingError::NoSeats);
        }
        seats.iter_mut().for_each(Seat::reset);
        Ok(Self {
            board,
            seats,
            turn: 0,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All seats in order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Gives the seats back, e.g. for a rematch.
    pub fn into_seats(self) -> Vec<Seat> {
        self.seats
    }

    /// 1-based number of the seat to move.
    pub fn seat_number(&self) -> usize {
        self.turn + 1
    }

    /// Seat to move.
    pub fn current(&self) -> &Seat {
        &self.seats[self.turn]
    }

    /// Returns true if the computer is one of the players.
    pub fn computer_mode(&self) -> bool {
        self.seats.iter().any(|s| s.player.is_computer())
    }

    /// Turns console text into a face-down position.
    #[instrument(skip(self))]
    pub fn validate(&self, input: &str) -> Result<Position, PickError> {
        let pos = parse_position(input, self.board.dimensions())?;
        if !self.board.moves().contains(pos) {
            return Err(PickError::AlreadyFlipped(pos));
        }
        Ok(pos)
    }

    /// Turns a face-down card up.
    #[instrument(skip(self))]
    pub fn flip(&mut self, pos: Position) -> Result<(), PickError> {
        let dims = self.board.dimensions();
        if !dims.contains(pos) {
            return Err(CoordinateError::OutOfRange(dims).into());
        }
        if !self.board.moves().contains(pos) {
            return Err(PickError::AlreadyFlipped(pos));
        }
        self.board
            .flip(pos)
            .map_err(|_| PickError::AlreadyFlipped(pos))
    }

    /// Settles a turn once two cards are face up.
    ///
    /// A match scores for the current seat, which keeps the turn. A
    /// mismatch turns both cards back down and passes the turn. The
    /// same position given twice is a mismatch.
    #[instrument(skip(self), fields(seat = self.seat_number()))]
    pub fn resolve(&mut self, first: Position, second: Position) -> PairOutcome {
        if first != second && self.board.compare(first, second) {
            self.board.mark_matched(first, second);
            self.seats[self.turn].score += 1;
            info!(
                player = %self.current().player,
                score = self.current().score,
                "Pair found"
            );
            PairOutcome::Matched
        } else {
            let picked = if first == second {
                vec![first]
            } else {
                vec![first, second]
            };
            for pos in picked {
                if !self.is_face_up(pos) {
                    continue;
                }
                if let Err(err) = self.board.flip(pos) {
                    debug!(%err, "Card was not face up");
                }
            }
            self.switch_turn();
            PairOutcome::Mismatched
        }
    }

    fn is_face_up(&self, pos: Position) -> bool {
        self.board
            .card(pos)
            .is_some_and(|card| card.is_visible() && !card.is_matched())
    }

    /// Passes the turn to the next seat, wrapping to seat 1.
    #[instrument(skip(self), fields(from = self.seat_number()))]
    pub fn switch_turn(&mut self) {
        self.turn = (self.turn + 1) % self.seats.len();
        debug!(seat = self.seat_number(), "Turn passed");
    }

    /// Returns true once no face-down cards remain.
    #[instrument(skip(self))]
    pub fn is_over(&self) -> bool {
        self.board.moves().is_empty()
    }

    /// Seats ordered by score, highest first; ties keep seat order.
    #[instrument(skip(self))]
    pub fn standings(&self) -> Vec<&Seat> {
        let mut standings: Vec<&Seat> = self.seats.iter().collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    /// Every seat sharing the top score.
    #[instrument(skip(self))]
    pub fn leaders(&self) -> Vec<&Seat> {
        let top = self.seats.iter().map(|s| s.score).max().unwrap_or(0);
        self.seats.iter().filter(|s| s.score == top).collect()
    }
}
