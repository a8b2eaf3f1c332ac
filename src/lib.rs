//! Parlor Games - console tic-tac-toe and memory
//!
//! Two small turn-based games played at one keyboard, each with an
//! optional computer opponent that picks uniformly at random from the
//! legal moves.
//!
//! # Architecture
//!
//! - **Grid**: positions, dimensions, move sets and `row,col` parsing
//! - **Games**: tic-tac-toe (n×n, win by row/column/diagonal) and
//!   memory (pairs, scores, restart/rematch sentinels)
//! - **Players**: names, human/computer seats, setup validation
//! - **Console**: prompt loops over any reader and writer
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use parlor_games::{Console, ParlorConfig, tictactoe};
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ParlorConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut console = Console::stdio();
//! tictactoe::play(&mut console, config.tictactoe(), &mut rng)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod games;
mod players;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{BOARD_SIZE_RANGE, ConfigError, MemoryConfig, ParlorConfig, TicTacToeConfig};

// Crate-level exports - Console
pub use console::{Console, ConsoleError};

// Crate-level exports - Errors
pub use error::PlayError;

// Crate-level exports - Grid
pub use games::grid::{CoordinateError, Dimensions, MoveSet, Position, parse_position};

// Crate-level exports - Players
pub use players::{
    COMPUTER_NAME, Contestant, MAX_PLAYERS, PlayerKind, SetupError, ask_player_name, ask_yes_no,
    parse_player_count, parse_yes_no, pick_move, validate_name,
};

// Crate-level exports - Games
pub use games::{memory, tictactoe};
