//! Gridmark - terminal driver for the gridmark engine
//!
//! Wires the rules engine and the log scanner to a command line: TOML game
//! configuration, an interactive turn loop, and a plain-text error report.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod report;

pub use cli::{Cli, Command};
pub use config::{ConfigFileError, GameConfig, PlayerConfig};
pub use driver::{parse_move, run_game, GameSummary, ParseMoveError, PlayOutcome};
pub use report::write_tally;
