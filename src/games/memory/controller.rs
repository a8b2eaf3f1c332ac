//! Memory game loop with restart, rematch and new-game flow.

use super::board::Board;
use super::card::deal;
use super::game::{MemoryGame, PairOutcome, PickError};
use super::setup::negotiate;
use crate::config::MemoryConfig;
use crate::console::{Console, ConsoleError};
use crate::error::PlayError;
use crate::games::grid::Position;
use crate::players::{ask_yes_no, pick_move};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Move-prompt inputs that abandon the game and its players.
pub const RESTART_COMMANDS: [&str; 2] = ["r", "restart"];

/// Move-prompt inputs that keep the players and deal again.
pub const REMATCH_COMMANDS: [&str; 2] = ["m", "rematch"];

/// What a player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn this card over.
    Pick(Position),
    /// Back to setup with new players.
    Restart,
    /// Same players, fresh board and scores.
    Rematch,
}

/// How a round was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Every pair was found.
    Finished,
    /// A player asked to restart.
    Restart,
    /// A player asked for a rematch.
    Rematch,
}

/// Reads a move-prompt answer: a sentinel or a face-down position.
#[instrument(skip(game))]
pub fn parse_command(game: &MemoryGame, answer: &str) -> Result<Command, PickError> {
    let word = answer.trim().to_lowercase();
    if RESTART_COMMANDS.contains(&word.as_str()) {
        return Ok(Command::Restart);
    }
    if REMATCH_COMMANDS.contains(&word.as_str()) {
        return Ok(Command::Rematch);
    }
    game.validate(answer).map(Command::Pick)
}

/// Plays memory until the players decline both a rematch and a new game.
#[instrument(skip_all, fields(rows = config.rows(), pairs = config.labels().len()))]
pub fn play<R, W, G>(
    console: &mut Console<R, W>,
    config: &MemoryConfig,
    rng: &mut G,
) -> Result<(), PlayError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut seated = None;
    loop {
        console.say("Let's play Memory!")?;
        let seats = match seated.take() {
            Some(seats) => seats,
            None => negotiate(console)?,
        };
        let board = Board::new(deal(config.labels().as_slice(), rng), *config.rows())?;
        let mut game = MemoryGame::new(board, seats)?;

        match play_round(console, &mut game, rng)? {
            RoundEnd::Restart => {
                info!("Restart requested, seating new players");
                console.say("restarting with new players")?;
                continue;
            }
            RoundEnd::Rematch => {
                info!("Rematch requested mid-game");
                console.say("rematch! same players, new board")?;
                seated = Some(game.into_seats());
                continue;
            }
            RoundEnd::Finished => report(console, &game)?,
        }

        if ask_yes_no(console, "do you want a rematch (y/n)?")? {
            info!("Rematch with the same players");
            seated = Some(game.into_seats());
            continue;
        }
        if !ask_yes_no(console, "do you want to play a new game (y/n)?")? {
            break;
        }
        info!("New game with fresh players");
    }
    console.say("goodbye!")?;
    Ok(())
}

/// Plays until the board is cleared or a sentinel is entered.
#[instrument(skip_all)]
pub fn play_round<R, W, G>(
    console: &mut Console<R, W>,
    game: &mut MemoryGame,
    rng: &mut G,
) -> Result<RoundEnd, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say(game.board().display())?;

    while !game.is_over() {
        let first = match flip_one(console, game, rng)? {
            Step::Flipped(pos) => pos,
            Step::Leave(end) => return Ok(end),
        };
        let second = match flip_one(console, game, rng)? {
            Step::Flipped(pos) => pos,
            Step::Leave(end) => return Ok(end),
        };

        let name = game.current().player().name().clone();
        match game.resolve(first, second) {
            PairOutcome::Matched => {
                console.say(format!(
                    "{name} found a pair! ({} so far)",
                    game.current().score()
                ))?;
            }
            PairOutcome::Mismatched => {
                console.say(format!(
                    "no match! it's {}'s turn",
                    game.current().player().name()
                ))?;
                console.say(game.board().display())?;
            }
        }
    }
    Ok(RoundEnd::Finished)
}

enum Step {
    Flipped(Position),
    Leave(RoundEnd),
}

fn flip_one<R, W, G>(
    console: &mut Console<R, W>,
    game: &mut MemoryGame,
    rng: &mut G,
) -> Result<Step, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        let command = if game.current().player().is_computer() {
            match pick_move(game.board().moves(), rng) {
                Some(pos) => {
                    console.say(format!("{} flips {pos}", game.current().player()))?;
                    Command::Pick(pos)
                }
                None => return Ok(Step::Leave(RoundEnd::Finished)),
            }
        } else {
            let prompt = format!(
                "{} (player #{}), pick a card as row,column ('r' to restart, 'm' for a rematch):",
                game.current().player(),
                game.seat_number()
            );
            console.ask_until(&prompt, |answer| parse_command(game, answer))?
        };

        let pos = match command {
            Command::Pick(pos) => pos,
            Command::Restart => return Ok(Step::Leave(RoundEnd::Restart)),
            Command::Rematch => return Ok(Step::Leave(RoundEnd::Rematch)),
        };
        match game.flip(pos) {
            Ok(()) => {
                debug!(%pos, "Card turned up");
                console.say(game.board().display())?;
                return Ok(Step::Flipped(pos));
            }
            Err(err) => console.say(err)?,
        }
    }
}

/// Prints final scores and the winner, or everyone tied at the top.
#[instrument(skip_all)]
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &MemoryGame,
) -> Result<(), ConsoleError> {
    console.say("final scores:")?;
    for seat in game.standings() {
        console.say(format!("{}: {}", seat.player(), seat.score()))?;
    }

    let leaders = game.leaders();
    match leaders.as_slice() {
        [winner] => console.say(format!("the winner is: {}!", winner.player())),
        tied => {
            let names: Vec<&str> = tied.iter().map(|s| s.player().name().as_str()).collect();
            console.say(format!("it's a tie between {}!", names.join(", ")))
        }
    }
}
