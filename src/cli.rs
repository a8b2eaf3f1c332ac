//! Command-line interface for parlor_games.

use crate::config::ParlorConfig;
use crate::games::tictactoe::Mark;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Parlor Games - tic-tac-toe and memory at the console
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Console tic-tac-toe and memory games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "parlor.toml", global = true)]
    pub config: PathBuf,

    /// Seed for shuffles and computer moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play tic-tac-toe
    Tictactoe {
        /// Length of a board side
        #[arg(long)]
        size: Option<usize>,

        /// Mark that moves first
        #[arg(long, value_enum)]
        first: Option<Mark>,
    },

    /// Play the memory matching game
    Memory {
        /// Rows on the board
        #[arg(long)]
        rows: Option<usize>,

        /// Card labels, one per pair (comma-separated)
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,
    },
}

impl Cli {
    /// Layers command-line flags over file configuration.
    #[instrument(skip(config))]
    pub fn apply(&self, config: ParlorConfig) -> ParlorConfig {
        let mut config = match self.seed {
            Some(seed) => config.with_seed(Some(seed)),
            None => config,
        };

        match &self.command {
            Command::Tictactoe { size, first } => {
                let mut tictactoe = config.tictactoe().clone();
                if let Some(size) = size {
                    tictactoe = tictactoe.with_size(*size);
                }
                if let Some(first) = first {
                    tictactoe = tictactoe.with_first_mark(*first);
                }
                config = config.with_tictactoe(tictactoe);
            }
            Command::Memory { rows, labels } => {
                let mut memory = config.memory().clone();
                if let Some(rows) = rows {
                    memory = memory.with_rows(*rows);
                }
                if let Some(labels) = labels {
                    memory = memory.with_labels(labels.clone());
                }
                config = config.with_memory(memory);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["parlor", "--seed", "9", "memory", "--rows", "2", "--labels", "x,y"]);
        let config = cli.apply(ParlorConfig::default());
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.memory().rows(), 2);
        assert_eq!(config.memory().labels(), &vec!["x".to_string(), "y".to_string()]);
        assert_eq!(*config.tictactoe().size(), 3);
    }

    #[test]
    fn test_tictactoe_flags() {
        let cli = Cli::parse_from(["parlor", "tictactoe", "--size", "4", "--first", "o"]);
        let config = cli.apply(ParlorConfig::default());
        assert_eq!(*config.tictactoe().size(), 4);
        assert_eq!(*config.tictactoe().first_mark(), Mark::O);
        assert_eq!(*config.seed(), None);
    }
}
