//! Draw detection.

use super::super::{Board, Symbol};
use super::win::RuleEngine;
use tracing::instrument;

/// A full board on which none of `symbols` owns a line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, symbols: &[Symbol]) -> bool {
    board.is_full() && RuleEngine::winner(board, symbols).is_none()
}
