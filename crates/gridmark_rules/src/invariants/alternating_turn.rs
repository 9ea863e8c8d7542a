//! Alternating turn invariant: seats alternate First, Second, First, ...

use super::super::{GameSession, Seat};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: players alternate turns.
///
/// The history shows the first player's symbol, then the second's, and so
/// on. While in progress the active seat is the one due next; after a
/// terminal move it stays on whoever made that move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .zip(Seat::iter().cycle())
            .all(|(placement, seat)| placement.symbol == game.player(seat).symbol());
        if !alternates {
            return false;
        }

        let placed = history.len();
        let expected = if placed == 0 || !game.current_state().is_terminal() {
            placed
        } else {
            placed - 1
        };
        let expected_seat = if expected % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };

        game.active_seat() == expected_seat
    }

    fn description() -> &'static str {
        "Players alternate turns, first player first"
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
        assert!(AlternatingTurnInvariant::holds(&session()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = session()
            .replay([(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)])
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.active_seat(), Seat::Second);
    }

    #[test]
    fn test_holds_after_win() {
        let game = session()
            .replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)])
            .unwrap();
        assert!(game.current_state().is_terminal());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = session();
        game.board.place(0, 0, Symbol::X).unwrap();
        game.board.place(1, 1, Symbol::X).unwrap();
        game.history.push(Placement::new(0, 0, Symbol::X));
        game.history.push(Placement::new(1, 1, Symbol::X));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_stale_active_seat_violates() {
        let mut game = session().replay([(0, 0)]).unwrap();
        game.active = Seat::First;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
