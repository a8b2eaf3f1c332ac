//! The games and the grid addressing they share.

pub mod grid;
pub mod memory;
pub mod tictactoe;
