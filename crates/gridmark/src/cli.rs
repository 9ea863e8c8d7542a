//! Command-line interface for gridmark.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridmark - N-by-N tic-tac-toe and log error tallies
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "gridmark.toml")]
        config: PathBuf,

        /// Board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Allow boards smaller than 3x3
        #[arg(long)]
        any_size: bool,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count distinct error messages in a log file
    Scan {
        /// Log file to read
        path: PathBuf,

        /// Only show the K most frequent messages
        #[arg(long)]
        top: Option<usize>,
    },
}
