//! Game configuration loaded from TOML.
//!
//! Every field has a default, so a missing file or a partial one is
//! fine. Command-line flags are layered on top with the `with_*`
//! setters before [`ParlorConfig::validate`] runs.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest and largest tic-tac-toe board side.
pub const BOARD_SIZE_RANGE: std::ops::RangeInclusive<usize> = 3..=9;

/// Tic-tac-toe settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Length of a board side.
    size: usize,

    /// Mark that moves first.
    first_mark: Mark,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            first_mark: Mark::X,
        }
    }
}

/// Memory game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MemoryConfig {
    /// Rows on the board; columns follow from the deck size.
    rows: usize,

    /// One label per pair of cards.
    labels: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            labels: ["A", "B", "C", "D", "E", "F"].map(String::from).to_vec(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ParlorConfig {
    /// Fixed RNG seed for reproducible shuffles and computer moves.
    seed: Option<u64>,

    /// Tic-tac-toe settings.
    tictactoe: TicTacToeConfig,

    /// Memory game settings.
    memory: MemoryConfig,
}

impl ParlorConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that both games can be set up with these settings.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.tictactoe.size;
        if !BOARD_SIZE_RANGE.contains(&size) {
            return Err(ConfigError::new(format!(
                "tictactoe.size must be between {} and {}, got {}",
                BOARD_SIZE_RANGE.start(),
                BOARD_SIZE_RANGE.end(),
                size
            )));
        }

        let labels = &self.memory.labels;
        if labels.is_empty() {
            return Err(ConfigError::new("memory.labels must not be empty".to_string()));
        }
        if labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::new("memory.labels must not contain blank labels".to_string()));
        }
        let distinct: HashSet<&String> = labels.iter().collect();
        if distinct.len() != labels.len() {
            return Err(ConfigError::new("memory.labels must be unique".to_string()));
        }

        let rows = self.memory.rows;
        let cards = labels.len() * 2;
        if rows == 0 || cards % rows != 0 {
            return Err(ConfigError::new(format!(
                "memory.rows must divide the {} cards evenly, got {}",
                cards, rows
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
