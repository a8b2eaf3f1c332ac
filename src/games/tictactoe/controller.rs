//! Tic-tac-toe game loop with rematch and new-game flow.

use super::setup::{Roster, negotiate};
use super::{Game, GameStatus};
use crate::config::TicTacToeConfig;
use crate::console::{Console, ConsoleError};
use crate::games::grid::Position;
use crate::players::{ask_yes_no, pick_move};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Plays tic-tac-toe until the players decline both a rematch and a
/// new game.
#[instrument(skip_all, fields(size = config.size()))]
pub fn play<R, W, G>(
    console: &mut Console<R, W>,
    config: &TicTacToeConfig,
    rng: &mut G,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut seated: Option<Roster> = None;
    loop {
        console.say("Let's play Tic-Tac-Toe!")?;
        let roster = match seated.take() {
            Some(roster) => roster,
            None => negotiate(console, rng)?,
        };

        match play_round(console, &roster, config, rng)? {
            GameStatus::Won(mark) => {
                console.say(format!("the winner is: {}!", roster.player(mark)))?;
            }
            GameStatus::Tie => console.say("game over, it's a tie!")?,
            GameStatus::InProgress => warn!("Round ended while still in progress"),
        }

        if ask_yes_no(console, "do you want a rematch (y/n)?")? {
            info!("Rematch with the same players");
            seated = Some(roster);
            continue;
        }
        if !ask_yes_no(console, "do you want to play a new game (y/n)?")? {
            break;
        }
        info!("New game with fresh players");
    }
    console.say("goodbye!")
}

/// Plays one game on a fresh board and returns how it ended.
#[instrument(skip_all)]
pub fn play_round<R, W, G>(
    console: &mut Console<R, W>,
    roster: &Roster,
    config: &TicTacToeConfig,
    rng: &mut G,
) -> Result<GameStatus, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut game = Game::new(*config.size(), *config.first_mark());
    console.say(format!("the {} starts first move", game.to_move()))?;
    console.say(game.board().display())?;

    while game.status() == GameStatus::InProgress {
        let Some(pos) = next_position(console, roster, &game, rng)? else {
            break;
        };
        if let Err(err) = game.place(pos) {
            console.say(err)?;
            continue;
        }
        console.say(game.board().display())?;
    }
    Ok(game.status())
}

fn next_position<R, W, G>(
    console: &mut Console<R, W>,
    roster: &Roster,
    game: &Game,
    rng: &mut G,
) -> Result<Option<Position>, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mark = game.to_move();
    let player = roster.player(mark);
    if player.is_computer() {
        let pick = pick_move(game.board().moves(), rng);
        if let Some(pos) = pick {
            console.say(format!("{player}({mark}) plays {pos}"))?;
        }
        return Ok(pick);
    }

    let prompt = format!("enter row number,column number for {player}({mark}) separated by ',':");
    console.ask_until(&prompt, |answer| game.validate(answer)).map(Some)
}
