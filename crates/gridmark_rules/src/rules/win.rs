//! Win detection over rows, columns and both diagonals.

use super::super::{Board, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A complete line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row `i`.
    #[display("row {_0}")]
    Row(usize),
    /// Column `i`.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Stateless win evaluator.
///
/// Scans the whole board in O(size^2). The interface only takes a board and a
/// symbol, so an incremental check limited to the last move's lines can
/// replace the scan later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleEngine;

impl RuleEngine {
    /// True iff `symbol` fills some row, column or diagonal.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn evaluate_win(board: &Board, symbol: Symbol) -> bool {
        Self::winning_line(board, symbol).is_some()
    }

    /// Returns the first line completely filled by `symbol`.
    ///
    /// Rows and columns are tracked with separate flags that reset for every
    /// index, so a broken row never hides a complete column and vice versa.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn winning_line(board: &Board, symbol: Symbol) -> Option<Line> {
        let size = board.size();
        let owns = |row: usize, col: usize| board.occupant(row, col) == Some(symbol);

        for i in 0..size {
            let mut row_complete = true;
            let mut col_complete = true;
            for j in 0..size {
                if !owns(i, j) {
                    row_complete = false;
                }
                if !owns(j, i) {
                    col_complete = false;
                }
            }
            if row_complete {
                return Some(Line::Row(i));
            }
            if col_complete {
                return Some(Line::Column(i));
            }
        }

        let mut main_complete = true;
        let mut anti_complete = true;
        for i in 0..size {
            if !owns(i, i) {
                main_complete = false;
            }
            if !owns(i, size - 1 - i) {
                anti_complete = false;
            }
        }
        if main_complete {
            return Some(Line::MainDiagonal);
        }
        if anti_complete {
            return Some(Line::AntiDiagonal);
        }

        None
    }

    /// Returns the first of `symbols` that owns a complete line.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn winner(board: &Board, symbols: &[Symbol]) -> Option<Symbol> {
        symbols
            .iter()
            .copied()
            .find(|symbol| Self::evaluate_win(board, *symbol))
    }
}
