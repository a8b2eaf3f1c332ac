//! Validation for the questions asked while seating players.

use super::COMPUTER_NAME;
use crate::console::{Console, ConsoleError};
use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use tracing::instrument;

/// Most players a multi-player memory game seats.
pub const MAX_PLAYERS: usize = 10;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z]+$").expect("name pattern compiles"));

/// Rejected answer during player setup.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Answer outside the offered options.
    #[display("invalid answer, the possibilities are: {}", _0.join("/"))]
    InvalidAnswer(Vec<String>),

    /// Name with anything other than letters.
    #[display("invalid name, must contain letters only, try again")]
    InvalidName,

    /// Name taken by the computer opponent.
    #[display("invalid name, '{}' is reserved, try again", COMPUTER_NAME)]
    ReservedName,

    /// Player count that is not a whole number from two to [`MAX_PLAYERS`].
    #[display("invalid number of players, enter a whole number from 2 to {}", MAX_PLAYERS)]
    InvalidPlayerCount,

    /// Mark not in the remaining pool.
    #[display("invalid icon, the possibilities are: {}", _0.join("/"))]
    InvalidIcon(Vec<String>),
}

impl std::error::Error for SetupError {}

/// Parses a `y`/`n` answer, ignoring case.
#[instrument]
pub fn parse_yes_no(answer: &str) -> Result<bool, SetupError> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(SetupError::InvalidAnswer(vec!["y".into(), "n".into()])),
    }
}

/// Checks a player name and normalizes its case.
///
/// Names are ASCII letters only and may not be the computer's name in
/// any casing.
#[instrument]
pub fn validate_name(raw: &str) -> Result<String, SetupError> {
    let name = raw.trim();
    if !NAME_PATTERN.is_match(name) {
        return Err(SetupError::InvalidName);
    }
    if name.eq_ignore_ascii_case(COMPUTER_NAME) {
        return Err(SetupError::ReservedName);
    }
    Ok(capitalize(name))
}

/// Parses how many people are playing.
#[instrument]
pub fn parse_player_count(answer: &str) -> Result<usize, SetupError> {
    match answer.trim().parse::<usize>() {
        Ok(count) if (2..=MAX_PLAYERS).contains(&count) => Ok(count),
        _ => Err(SetupError::InvalidPlayerCount),
    }
}

/// First letter upper case, the rest lower case.
pub(crate) fn capitalize(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Asks a yes/no question until answered.
#[instrument(skip(console))]
pub fn ask_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<bool, ConsoleError> {
    console.ask_until(question, parse_yes_no)
}

/// Asks for a player name until a valid one is given.
#[instrument(skip(console))]
pub fn ask_player_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<String, ConsoleError> {
    console.ask_until(question, validate_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("N"), Ok(false));
        assert!(parse_yes_no("yes").is_err());
        assert!(parse_yes_no("").is_err());
    }

    #[test]
    fn test_valid_names_are_capitalized() {
        assert_eq!(validate_name("alice"), Ok("Alice".to_string()));
        assert_eq!(validate_name("BOB"), Ok("Bob".to_string()));
        assert_eq!(validate_name("mcKay"), Ok("Mckay".to_string()));
    }

    #[test]
    fn test_names_must_be_letters() {
        for raw in ["", "al1ce", "mary jane", "o'neil", "jürgen"] {
            assert_eq!(validate_name(raw), Err(SetupError::InvalidName), "name {raw:?}");
        }
    }

    #[test]
    fn test_computer_name_is_reserved() {
        assert_eq!(validate_name("computer"), Err(SetupError::ReservedName));
        assert_eq!(validate_name("Computer"), Err(SetupError::ReservedName));
        assert_eq!(validate_name("computers"), Ok("Computers".to_string()));
    }

    #[test]
    fn test_player_count() {
        assert_eq!(parse_player_count("2"), Ok(2));
        assert_eq!(parse_player_count(" 5 "), Ok(5));
        for raw in ["1", "0", "-3", "two", ""] {
            assert_eq!(parse_player_count(raw), Err(SetupError::InvalidPlayerCount));
        }
    }

    #[test]
    fn test_oversized_player_count_rejected() {
        assert_eq!(parse_player_count("10"), Ok(MAX_PLAYERS));
        for raw in ["11", "1000000000000", "18446744073709551615", "99999999999999999999999"] {
            assert_eq!(
                parse_player_count(raw),
                Err(SetupError::InvalidPlayerCount),
                "count {raw:?}"
            );
        }
    }

    #[test]
    fn test_error_messages_list_options() {
        let err = parse_yes_no("maybe").unwrap_err();
        assert_eq!(err.to_string(), "invalid answer, the possibilities are: y/n");
    }
}
