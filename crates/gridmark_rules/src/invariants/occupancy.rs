//! Occupancy invariant: the board holds exactly the recorded placements.

use super::super::GameSession;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: occupied cells equal completed placements.
///
/// Each recorded placement's cell holds its symbol, no cell is recorded
/// twice, and no other cell is occupied.
pub struct OccupancyMatchesHistoryInvariant;

impl Invariant<GameSession> for OccupancyMatchesHistoryInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();
        let board = game.board();

        if board.occupied_count() != history.len() {
            return false;
        }

        let mut seen = HashSet::new();
        history.iter().all(|placement| {
            seen.insert((placement.row, placement.col))
                && board.get(placement.row, placement.col) == Ok(Some(placement.symbol))
        })
    }

    fn description() -> &'static str {
        "Occupied cells match the placement history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Placement, Player, Symbol};

    fn session() -> GameSession {
        GameSession::new(Player::new("X", Symbol::X), Player::new("O", Symbol::O), 3).unwrap()
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(OccupancyMatchesHistoryInvariant::holds(&session()));
    }

    #[test]
    fn test_holds_through_play() {
        let game = session().replay([(0, 0), (2, 2), (1, 0)]).unwrap();
        assert!(OccupancyMatchesHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_placement_violates() {
        let mut game = session();
        game.board.place(1, 1, Symbol::X).unwrap();
        assert!(!OccupancyMatchesHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_mismatched_symbol_violates() {
        let mut game = session();
        game.board.place(1, 1, Symbol::X).unwrap();
        game.history.push(Placement::new(1, 1, Symbol::O));
        assert!(!OccupancyMatchesHistoryInvariant::holds(&game));
    }
}
