//! Errors that end a game session.

use crate::console::ConsoleError;
use crate::games::memory::{DealError, SeatingError};

/// Error ending a session.
#[derive(Debug, derive_more::Display)]
pub enum PlayError {
    /// Console closed or failed.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// Deck could not be laid out.
    #[display("cannot deal the board: {}", _0)]
    Deal(DealError),

    /// No players to start with.
    #[display("cannot start the game: {}", _0)]
    Seating(SeatingError),
}

impl PlayError {
    /// Returns true if the player closed the input stream.
    pub fn is_closed(&self) -> bool {
        matches!(self, PlayError::Console(ConsoleError::Closed))
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Console(err) => Some(err),
            PlayError::Deal(err) => Some(err),
            PlayError::Seating(err) => Some(err),
        }
    }
}

impl From<ConsoleError> for PlayError {
    fn from(err: ConsoleError) -> Self {
        PlayError::Console(err)
    }
}

impl From<DealError> for PlayError {
    fn from(err: DealError) -> Self {
        PlayError::Deal(err)
    }
}

impl From<SeatingError> for PlayError {
    fn from(err: SeatingError) -> Self {
        PlayError::Seating(err)
    }
}
