//! Property tests for board and session invariants.

use gridmark_rules::{Board, GameSession, GameState, MoveError, Player, RuleEngine, Symbol};
use proptest::prelude::*;

fn session(size: usize) -> GameSession {
    GameSession::new(Player::new("X", Symbol::X), Player::new("O", Symbol::O), size).unwrap()
}

/// A board size together with every cell index in random order.
fn size_and_order() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..=5).prop_flat_map(|n| (Just(n), Just((0..n * n).collect::<Vec<_>>()).prop_shuffle()))
}

/// A board size with a random occupancy grid (`None` empty, `Some(true)` X).
fn size_and_grid() -> impl Strategy<Value = (usize, Vec<Option<bool>>)> {
    (1usize..=6).prop_flat_map(|n| (Just(n), prop::collection::vec(any::<Option<bool>>(), n * n)))
}

fn board_from_grid(n: usize, grid: &[Option<bool>], transpose: bool) -> Board {
    let mut board = Board::new(n).unwrap();
    for (idx, cell) in grid.iter().enumerate() {
        let (mut row, mut col) = (idx / n, idx % n);
        if transpose {
            std::mem::swap(&mut row, &mut col);
        }
        if let Some(is_x) = cell {
            let symbol = if *is_x { Symbol::X } else { Symbol::O };
            board.place(row, col, symbol).unwrap();
        }
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn playing_every_cell_ends_in_win_or_draw((n, order) in size_and_order()) {
        let mut game = session(n);
        let mut placed = 0;
        for idx in order {
            let mover = game.current_player().symbol();
            match game.submit_move(idx / n, idx % n) {
                Ok(GameState::InProgress) => {
                    placed += 1;
                    prop_assert_ne!(game.current_player().symbol(), mover);
                }
                Ok(GameState::Won(symbol)) => {
                    placed += 1;
                    prop_assert_eq!(symbol, mover);
                    break;
                }
                Ok(GameState::Draw) => {
                    placed += 1;
                    prop_assert_eq!(placed, n * n);
                    break;
                }
                Err(err) => prop_assert!(false, "unexpected rejection: {}", err),
            }
            prop_assert_eq!(game.board().occupied_count(), placed);
        }
        prop_assert!(game.current_state().is_terminal());
        if placed == n * n && game.current_state().winner().is_none() {
            prop_assert_eq!(game.current_state(), GameState::Draw);
        }
        prop_assert_eq!(game.history().len(), placed);
    }

    #[test]
    fn occupied_cell_never_mutates((n, order) in size_and_order(), pick in any::<prop::sample::Index>()) {
        let mut game = session(n);
        let mut placed = Vec::new();
        for idx in order {
            if game.current_state().is_terminal() {
                break;
            }
            game.submit_move(idx / n, idx % n).unwrap();
            placed.push(idx);
        }
        let idx = placed[pick.index(placed.len())];
        let before = game.board_snapshot();
        let err = game.submit_move(idx / n, idx % n).unwrap_err();
        let rejected = matches!(err, MoveError::CellOccupied { .. } | MoveError::GameOver(_));
        prop_assert!(rejected, "unexpected error: {}", err);
        prop_assert_eq!(game.board_snapshot(), before);
    }

    #[test]
    fn place_on_occupied_board_cell_is_rejected((n, grid) in size_and_grid()) {
        let mut board = board_from_grid(n, &grid, false);
        let before = board.clone();
        for (idx, cell) in grid.iter().enumerate() {
            if cell.is_some() {
                prop_assert!(board.place(idx / n, idx % n, Symbol::X).is_err());
            }
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn is_full_iff_every_cell_occupied((n, grid) in size_and_grid()) {
        let board = board_from_grid(n, &grid, false);
        prop_assert_eq!(board.is_full(), grid.iter().all(Option::is_some));
    }

    #[test]
    fn win_detection_survives_transpose((n, grid) in size_and_grid()) {
        let board = board_from_grid(n, &grid, false);
        let transposed = board_from_grid(n, &grid, true);
        for symbol in [Symbol::X, Symbol::O] {
            prop_assert_eq!(
                RuleEngine::evaluate_win(&board, symbol),
                RuleEngine::evaluate_win(&transposed, symbol)
            );
        }
    }

    #[test]
    fn full_row_and_full_column_each_detected(n in 1usize..=7, k in 0usize..7) {
        let k = k % n;
        let mut rows = Board::new(n).unwrap();
        let mut cols = Board::new(n).unwrap();
        for i in 0..n {
            rows.place(k, i, Symbol::X).unwrap();
            cols.place(i, k, Symbol::X).unwrap();
        }
        prop_assert!(RuleEngine::evaluate_win(&rows, Symbol::X));
        prop_assert!(RuleEngine::evaluate_win(&cols, Symbol::X));
        prop_assert!(!RuleEngine::evaluate_win(&rows, Symbol::O));
    }
}

#[test]
fn full_row_with_empty_cell_elsewhere_is_not_full() {
    let mut board = Board::new(3).unwrap();
    for col in 0..3 {
        board.place(0, col, Symbol::X).unwrap();
    }
    board.place(1, 0, Symbol::O).unwrap();
    assert!(!board.is_full());
}
