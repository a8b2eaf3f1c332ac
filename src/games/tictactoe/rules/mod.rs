//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the game engine and its tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{check_winner, is_winner};
