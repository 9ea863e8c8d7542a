//! Session lifecycle states.

use super::types::Symbol;
use serde::{Deserialize, Serialize};

/// Where a session stands.
///
/// `InProgress` is the only state that accepts moves. `Won` and `Draw` are
/// terminal: nothing transitions out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("won by {_0}")]
    Won(Symbol),
    /// The board filled with no line completed.
    #[display("draw")]
    Draw,
}

impl GameState {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// The winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameState::Won(symbol) => Some(*symbol),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    /// True if the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameState::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::InProgress.is_terminal());
        assert!(GameState::Won(Symbol::X).is_terminal());
        assert!(GameState::Draw.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameState::Won(Symbol::O).winner(), Some(Symbol::O));
        assert_eq!(GameState::Draw.winner(), None);
        assert_eq!(GameState::InProgress.winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameState::Won(Symbol::X).to_string(), "won by X");
        assert_eq!(GameState::Draw.to_string(), "draw");
    }
}
