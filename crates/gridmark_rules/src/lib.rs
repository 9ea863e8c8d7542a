//! Gridmark rules - an N-by-N tic-tac-toe engine
//!
//! Board state, move validation, win and draw detection, and turn
//! progression as an explicit state machine. Callers (a CLI, a test harness,
//! a UI) drive a [`GameSession`] with `(row, col)` move requests.
//!
//! # Example
//!
//! ```
//! use gridmark_rules::{GameSession, GameState, Player, Symbol};
//!
//! let mut game = GameSession::new(
//!     Player::new("Ada", Symbol::X),
//!     Player::new("Grace", Symbol::O),
//!     3,
//! )?;
//!
//! assert_eq!(game.submit_move(1, 1)?, GameState::InProgress);
//! assert_eq!(game.current_player().name(), "Grace");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod invariants;
mod rules;
mod session;
mod setup;
mod state;
mod types;

pub use action::{MoveError, Placement};
pub use board::{Board, BoardError, BoardSnapshot};
pub use contracts::{CellAvailable, GameNotOver, LegalMove};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    OccupancyMatchesHistoryInvariant, SessionInvariants, TerminalStateInvariant,
};
pub use rules::{is_draw, Line, RuleEngine};
pub use session::{new_session, GameSession};
pub use setup::{check_players, ConfigError, SizePolicy, MAX_BOARD_SIZE};
pub use state::GameState;
pub use types::{Cell, Player, Seat, Symbol};
