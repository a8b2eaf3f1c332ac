//! Seating the two tic-tac-toe players.

use super::Mark;
use crate::console::{Console, ConsoleError};
use crate::players::{Contestant, SetupError, ask_player_name, ask_yes_no};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// The two players, keyed by mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    x: Contestant,
    o: Contestant,
}

impl Roster {
    /// Seats `first` on `mark` and `second` on the other mark.
    pub fn new(mark: Mark, first: Contestant, second: Contestant) -> Self {
        match mark {
            Mark::X => Self { x: first, o: second },
            Mark::O => Self { x: second, o: first },
        }
    }

    /// Player holding a mark.
    pub fn player(&self, mark: Mark) -> &Contestant {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Returns true if one seat is the computer.
    pub fn computer_mode(&self) -> bool {
        self.x.is_computer() || self.o.is_computer()
    }
}

fn parse_mark(answer: &str) -> Result<Mark, SetupError> {
    Mark::from_input(answer).ok_or_else(|| {
        SetupError::InvalidIcon(
            <Mark as strum::IntoEnumIterator>::iter()
                .map(|m| m.to_string())
                .collect(),
        )
    })
}

/// Lets the first player pick a mark or draws one at random.
#[instrument(skip_all)]
pub fn choose_mark<R, W, G>(console: &mut Console<R, W>, rng: &mut G) -> Result<Mark, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    if ask_yes_no(console, "do you want to select symbol (y/n)?")? {
        return console.ask_until("select icon X/O:", parse_mark);
    }
    let marks: Vec<Mark> = <Mark as strum::IntoEnumIterator>::iter().collect();
    Ok(marks.choose(rng).copied().unwrap_or(Mark::X))
}

/// Asks who is playing and which marks they use.
#[instrument(skip_all)]
pub fn negotiate<R, W, G>(console: &mut Console<R, W>, rng: &mut G) -> Result<Roster, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let vs_computer = ask_yes_no(console, "do you want to play against the computer (y/n)?")?;

    let roster = if vs_computer {
        let name = ask_player_name(console, "please enter your name:")?;
        let mark = choose_mark(console, rng)?;
        console.say(format!("you will play the {mark} symbol in this game"))?;
        Roster::new(mark, Contestant::human(name), Contestant::computer())
    } else {
        let first = ask_player_name(console, "player #1, please enter your name:")?;
        let mark = choose_mark(console, rng)?;
        console.say(format!("you will play the {mark} symbol in this game"))?;

        let second = ask_player_name(console, "player #2, please enter your name:")?;
        console.say(format!("you will play the {} symbol in this game", mark.opponent()))?;
        Roster::new(mark, Contestant::human(first), Contestant::human(second))
    };

    info!(
        x = %roster.player(Mark::X),
        o = %roster.player(Mark::O),
        computer_mode = roster.computer_mode(),
        "Players seated"
    );
    Ok(roster)
}
