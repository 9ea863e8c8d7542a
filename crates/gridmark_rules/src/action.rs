//! Placements and the reasons a move request is rejected.

use super::board::BoardError;
use super::state::GameState;
use super::types::Symbol;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A completed placement: `symbol` written at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Symbol placed.
    pub symbol: Symbol,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.symbol, self.row, self.col)
    }
}

/// Why a move request was refused. The session is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..size`.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// Target cell already holds a symbol.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The session already reached a terminal state.
    #[display("Game is already over ({_0})")]
    GameOver(#[error(not(source))] GameState),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { row, col, size } => MoveError::OutOfBounds { row, col, size },
            BoardError::CellOccupied { row, col } => MoveError::CellOccupied { row, col },
        }
    }
}
