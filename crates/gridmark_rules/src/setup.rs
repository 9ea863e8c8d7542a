//! Session construction parameters and their validation.

use super::types::{Player, Symbol};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Reasons a session (or board) cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board size of zero.
    #[display("Invalid configuration: board size must be at least 1")]
    EmptyBoard,

    /// Board smaller than the active size policy allows.
    #[display("Invalid configuration: board size {size} is below the minimum of {minimum}")]
    BoardTooSmall {
        /// Requested size.
        size: usize,
        /// Smallest size the policy accepts.
        minimum: usize,
    },

    /// Both players chose the same mark.
    #[display("Invalid configuration: both players use the symbol '{_0}'")]
    DuplicateSymbol(#[error(not(source))] Symbol),

    /// A player chose a whitespace mark.
    #[display("Invalid configuration: player symbol must not be blank")]
    BlankSymbol,

    /// Board larger than [`MAX_BOARD_SIZE`].
    #[display("Invalid configuration: board size {size} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    BoardTooLarge {
        /// Requested size.
        size: usize,
    },

    /// A player chose the mark used to render empty cells.
    #[display("Invalid configuration: symbol '{_0}' is reserved for empty cells")]
    ReservedSymbol(#[error(not(source))] Symbol),
}

/// Largest accepted side length.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Which board sizes a session accepts.
///
/// Lines shorter than three are trivially easy to complete, so standard play
/// rejects them. `AnySize` keeps the engine usable for any `N >= 1`; on a 1x1
/// board the first placement wins outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePolicy {
    /// Boards of 3x3 and larger.
    #[default]
    Standard,
    /// Any non-empty board.
    #[serde(rename = "any")]
    AnySize,
}

impl SizePolicy {
    /// Smallest board size accepted under this policy.
    pub fn minimum(self) -> usize {
        match self {
            SizePolicy::Standard => 3,
            SizePolicy::AnySize => 1,
        }
    }

    /// Validates a requested board size.
    #[instrument]
    pub fn check(self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            warn!("Rejected empty board");
            return Err(ConfigError::EmptyBoard);
        }
        if size > MAX_BOARD_SIZE {
            warn!(size, "Rejected oversized board");
            return Err(ConfigError::BoardTooLarge { size });
        }
        let minimum = self.minimum();
        if size < minimum {
            warn!(size, minimum, "Rejected undersized board");
            return Err(ConfigError::BoardTooSmall { size, minimum });
        }
        Ok(())
    }
}

/// Validates that two players can share a session.
#[instrument(skip_all, fields(first = %first.symbol(), second = %second.symbol()))]
pub fn check_players(first: &Player, second: &Player) -> Result<(), ConfigError> {
    if first.symbol().is_blank() || second.symbol().is_blank() {
        warn!("Rejected blank symbol");
        return Err(ConfigError::BlankSymbol);
    }
    for symbol in [first.symbol(), second.symbol()] {
        if symbol == Symbol::EMPTY {
            warn!(%symbol, "Rejected reserved symbol");
            return Err(ConfigError::ReservedSymbol(symbol));
        }
    }
    if first.symbol() == second.symbol() {
        warn!("Rejected duplicate symbol");
        return Err(ConfigError::DuplicateSymbol(first.symbol()));
    }
    Ok(())
}
