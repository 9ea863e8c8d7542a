//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridmark_rules::{GameSession, Player, SizePolicy, Symbol};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One player's entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Single-character mark.
    symbol: char,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Converts to an engine player.
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), Symbol::new(self.symbol))
    }
}

/// Settings for a game played through the CLI.
///
/// ```toml
/// board_size = 4
/// size_policy = "standard"
///
/// [first]
/// name = "Ada"
/// symbol = "X"
///
/// [second]
/// name = "Grace"
/// symbol = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Which sizes are accepted.
    #[serde(default)]
    size_policy: SizePolicy,

    /// The player who moves first.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// The player who moves second.
    #[serde(default = "default_second")]
    second: PlayerConfig,
}

#[instrument]
fn default_board_size() -> usize {
    3
}

#[instrument]
fn default_first() -> PlayerConfig {
    PlayerConfig::new("Player 1", 'X')
}

#[instrument]
fn default_second() -> PlayerConfig {
    PlayerConfig::new("Player 2", 'O')
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            size_policy: SizePolicy::default(),
            first: default_first(),
            second: default_second(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigFileError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigFileError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds a session from these settings.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn build_session(&self) -> Result<GameSession, gridmark_rules::ConfigError> {
        GameSession::with_policy(
            self.first.to_player(),
            self.second.to_player(),
            self.board_size,
            self.size_policy,
        )
    }
}

/// Config file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigFileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigFileError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.size_policy(), SizePolicy::Standard);
        assert_eq!(config.first().symbol(), &'X');
        assert_eq!(config.second().name(), "Player 2");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("board_size = 5\n").unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.first(), &default_first());
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            board_size = 2
            size_policy = "any"

            [first]
            name = "Ada"
            symbol = "A"

            [second]
            name = "Grace"
            symbol = "G"
        "#;
        let config: GameConfig = toml::from_str(text).unwrap();
        assert_eq!(*config.size_policy(), SizePolicy::AnySize);
        let session = config.build_session().unwrap();
        assert_eq!(session.board().size(), 2);
        assert_eq!(session.current_player().name(), "Ada");
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_board_size(2)
            .with_size_policy(SizePolicy::AnySize);
        assert!(config.build_session().is_ok());
        assert!(GameConfig::default().with_board_size(2).build_session().is_err());
    }

    #[test]
    fn test_duplicate_symbols_fail_to_build() {
        let config = GameConfig::default().with_second(PlayerConfig::new("Copy", 'X'));
        assert_eq!(
            config.build_session().unwrap_err(),
            gridmark_rules::ConfigError::DuplicateSymbol(Symbol::X)
        );
    }
}
