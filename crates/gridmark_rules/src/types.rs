//! Core value types: symbols, cells, players and seats.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The mark a player places on the board.
///
/// Any character works as long as the two players in a session differ and
/// neither is whitespace or [`Symbol::EMPTY`], both of which would render
/// like an empty cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct Symbol(char);

impl Symbol {
    /// The conventional first-player mark.
    pub const X: Symbol = Symbol('X');
    /// The conventional second-player mark.
    pub const O: Symbol = Symbol('O');
    /// Mark used when rendering an empty cell. Not available to players.
    pub const EMPTY: Symbol = Symbol('.');

    /// Wraps a character as a symbol.
    pub const fn new(mark: char) -> Self {
        Self(mark)
    }

    /// Returns the underlying character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// True if the mark is whitespace.
    pub fn is_blank(self) -> bool {
        self.0.is_whitespace()
    }
}

impl From<char> for Symbol {
    fn from(mark: char) -> Self {
        Self(mark)
    }
}

/// A single square of the board.
///
/// Starts empty and is occupied at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    occupant: Option<Symbol>,
}

impl Cell {
    /// Creates an empty cell.
    pub const fn empty() -> Self {
        Self { occupant: None }
    }

    /// The symbol in this cell, if any.
    pub fn occupant(&self) -> Option<Symbol> {
        self.occupant
    }

    /// True if no symbol has been placed here.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Marks the cell. Callers must have checked that it is empty.
    pub(crate) fn occupy(&mut self, symbol: Symbol) {
        debug_assert!(self.is_empty(), "cell occupied twice");
        self.occupant = Some(symbol);
    }
}

/// A participant in a session: a display name and the symbol they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark placed by this player.
    #[getter(copy)]
    symbol: Symbol,
}

/// Which of the two players holds the turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Seat {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    #[instrument(level = "trace")]
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_alternates() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }

    #[test]
    fn test_blank_symbols() {
        assert!(Symbol::new(' ').is_blank());
        assert!(Symbol::new('\t').is_blank());
        assert!(!Symbol::X.is_blank());
    }

    #[test]
    fn test_cell_occupy() {
        let mut cell = Cell::empty();
        assert!(cell.is_empty());
        cell.occupy(Symbol::O);
        assert_eq!(cell.occupant(), Some(Symbol::O));
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Ada", Symbol::new('A'));
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.symbol(), Symbol::new('A'));
        assert_eq!(player.symbol().to_string(), "A");
    }
}
