//! Tic-tac-toe on an n×n board.

mod action;
mod controller;
mod game;
mod rules;
mod setup;
mod types;

pub use action::{Move, MoveError};
pub use controller::{play, play_round};
pub use game::Game;
pub use rules::{check_winner, is_tie, is_winner};
pub use setup::{Roster, choose_mark, negotiate};
pub use types::{Board, GameStatus, Mark, Square};
