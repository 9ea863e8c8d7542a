//! Game rules for N-by-N tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules hold no state, so a
//! single evaluator serves every session.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, RuleEngine};
