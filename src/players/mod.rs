//! Who sits at the table.

mod computer;
mod setup;

pub use computer::pick_move;
pub use setup::{
    MAX_PLAYERS, SetupError, ask_player_name, ask_yes_no, parse_player_count, parse_yes_no,
    validate_name,
};

use derive_getters::Getters;

/// Name reserved for the computer opponent.
pub const COMPUTER_NAME: &str = "computer";

/// Who makes a seat's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Moves drawn at random from the move set.
    Computer,
}

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Contestant {
    /// Display name.
    name: String,
    /// Human or computer.
    kind: PlayerKind,
}

impl Contestant {
    /// A human player with an already validated name.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// The computer opponent.
    pub fn computer() -> Self {
        Self {
            name: setup::capitalize(COMPUTER_NAME),
            kind: PlayerKind::Computer,
        }
    }

    /// Returns true for the computer seat.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

impl std::fmt::Display for Contestant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
