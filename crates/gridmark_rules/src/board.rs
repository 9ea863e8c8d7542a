//! N-by-N board storage with bounded access.

use super::setup::{ConfigError, MAX_BOARD_SIZE};
use super::types::{Cell, Symbol};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
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

    /// The target cell already holds a symbol.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Square grid of cells in row-major order.
///
/// The size is fixed at construction and cells only ever go from empty to
/// occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = size
            .checked_mul(size)
            .filter(|_| size <= MAX_BOARD_SIZE)
            .ok_or(ConfigError::BoardTooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![Cell::empty(); cells],
        })
    }

    /// Returns a fresh empty board of the same size.
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Cell::empty(); self.cells.len()],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index(row, col)?;
        self.cells.get(idx).ok_or(BoardError::OutOfBounds {
            row,
            col,
            size: self.size,
        })
    }

    /// Returns the symbol at `(row, col)`, `Ok(None)` for an empty cell.
    ///
    /// # Errors
    ///
    /// `BoardError::OutOfBounds` if either index is `>= size`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Symbol>, BoardError> {
        self.cell(row, col).map(Cell::occupant)
    }

    /// Occupant lookup for callers iterating within bounds.
    pub(crate) fn occupant(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cell(row, col).ok().and_then(Cell::occupant)
    }

    /// Places `symbol` at `(row, col)`.
    ///
    /// On error the board is left untouched.
    ///
    /// # Errors
    ///
    /// - `BoardError::OutOfBounds` if either index is `>= size`
    /// - `BoardError::CellOccupied` if the cell already holds a symbol
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        let cell = self.cells.get_mut(idx).ok_or(BoardError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        cell.occupy(symbol);
        debug!(row, col, %symbol, "Placed symbol");
        Ok(())
    }

    /// True iff every cell on the board is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Coordinates of every empty cell, row by row.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Read-only copy of the occupancy grid.
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = self
            .cells
            .chunks(self.size)
            .map(|row| row.iter().map(Cell::occupant).collect())
            .collect();
        BoardSnapshot {
            size: self.size,
            cells,
        }
    }
}

/// Detached view of a board for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Side length.
    pub size: usize,
    /// Occupants by row, then column.
    pub cells: Vec<Vec<Option<Symbol>>>,
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(symbol) => symbol.to_string(),
                    None => Symbol::EMPTY.to_string(),
                })
                .collect();
            write!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}
