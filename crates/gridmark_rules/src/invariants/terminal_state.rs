//! Terminal state invariant: the recorded state matches the board.

use super::super::rules::{is_draw, RuleEngine};
use super::super::{GameSession, GameState, Symbol};
use super::Invariant;

/// Invariant: `state` agrees with what the rules say about the board.
///
/// - `Won(s)`: `s` owns a line and made the last placement
/// - `Draw`: the board is full and nobody owns a line
/// - `InProgress`: the board has room and nobody owns a line
pub struct TerminalStateInvariant;

impl Invariant<GameSession> for TerminalStateInvariant {
    fn holds(game: &GameSession) -> bool {
        let board = game.board();
        let symbols: Vec<Symbol> = game.players().iter().map(|p| p.symbol()).collect();

        match game.current_state() {
            GameState::Won(symbol) => {
                RuleEngine::evaluate_win(board, symbol)
                    && game.history().last().map(|p| p.symbol) == Some(symbol)
            }
            GameState::Draw => is_draw(board, &symbols),
            GameState::InProgress => {
                !board.is_full() && RuleEngine::winner(board, &symbols).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Game state agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn session() -> GameSession {
        GameSession::new(Player::new("X", Symbol::X), Player::new("O", Symbol::O), 3).unwrap()
    }

    #[test]
    fn test_holds_in_progress() {
        let game = session().replay([(0, 0), (1, 1)]).unwrap();
        assert!(TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_draw() {
        let game = session()
            .replay([
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (2, 0),
                (1, 2),
                (2, 2),
                (2, 1),
            ])
            .unwrap();
        assert_eq!(game.current_state(), GameState::Draw);
        assert!(TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_win_violates() {
        let mut game = session();
        for col in 0..3 {
            game.board.place(0, col, Symbol::X).unwrap();
        }
        assert!(!TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut game = session();
        game.state = GameState::Draw;
        assert!(!TerminalStateInvariant::holds(&game));
    }
}
