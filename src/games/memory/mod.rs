//! Memory: find matching pairs on a grid of face-down cards.

mod board;
mod card;
mod controller;
mod game;
mod setup;

pub use board::{Board, DealError, FlipError};
pub use card::{Card, CardState, deal};
pub use controller::{
    Command, REMATCH_COMMANDS, RESTART_COMMANDS, RoundEnd, parse_command, play, play_round, report,
};
pub use game::{MemoryGame, PairOutcome, PickError, Seat, SeatingError};
pub use setup::negotiate;
