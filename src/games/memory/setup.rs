//! Seating memory players.

use super::game::Seat;
use crate::console::{Console, ConsoleError};
use crate::players::{Contestant, ask_player_name, ask_yes_no, parse_player_count};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Asks for the opponent type, the player count and every name.
///
/// Against the computer there are exactly two seats: the human in
/// seat 1 and the computer in seat 2.
#[instrument(skip_all)]
pub fn negotiate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<Seat>, ConsoleError> {
    let vs_computer = ask_yes_no(console, "do you want to play against the computer (y/n)?")?;

    let seats = if vs_computer {
        let name = ask_player_name(console, "please enter your name:")?;
        vec![
            Seat::new(Contestant::human(name)),
            Seat::new(Contestant::computer()),
        ]
    } else {
        let count = console.ask_until("how many players?", parse_player_count)?;
        let mut seats = Vec::new();
        for number in 1..=count {
            let name = ask_player_name(console, &format!("player #{number}, please enter your name:"))?;
            seats.push(Seat::new(Contestant::human(name)));
        }
        seats
    };

    info!(seats = seats.len(), computer_mode = vs_computer, "Players seated");
    Ok(seats)
}
