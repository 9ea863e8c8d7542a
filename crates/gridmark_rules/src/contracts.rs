//! Preconditions and postconditions for move requests.
//!
//! A move is `{LegalMove} submit_move {SessionInvariants}`: the precondition
//! is always checked before the board is touched, the postcondition is
//! checked in debug builds after every accepted move.

use super::action::MoveError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::session::GameSession;
use tracing::{instrument, warn};

/// Precondition: the session still accepts moves.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects requests once the session is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameSession) -> Result<(), MoveError> {
        let state = game.current_state();
        if state.is_terminal() {
            warn!(%state, "Move submitted after game over");
            return Err(MoveError::GameOver(state));
        }
        Ok(())
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellAvailable;

impl CellAvailable {
    /// Rejects out-of-range or occupied targets.
    #[instrument(skip(game))]
    pub fn check(game: &GameSession, row: usize, col: usize) -> Result<(), MoveError> {
        match game.board().get(row, col) {
            Ok(None) => Ok(()),
            Ok(Some(_)) => {
                warn!(row, col, "Cell already occupied");
                Err(MoveError::CellOccupied { row, col })
            }
            Err(err) => {
                warn!(row, col, %err, "Move out of bounds");
                Err(err.into())
            }
        }
    }
}

/// Composite precondition for a move request.
pub struct LegalMove;

impl LegalMove {
    /// Validates every precondition, game-over first.
    #[instrument(skip(game))]
    pub fn check(game: &GameSession, row: usize, col: usize) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellAvailable::check(game, row, col)?;
        Ok(())
    }
}

/// Checks the session invariants after a move.
///
/// Violations are logged and trip a debug assertion; release builds skip the
/// check entirely.
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {:?}", violations);
    }
}
