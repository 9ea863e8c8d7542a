//! Interactive turn loop over line-oriented input.

use derive_more::{Display, Error};
use gridmark_rules::{BoardSnapshot, GameSession, GameState, Placement};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How an interactive game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Reached `Won` or `Draw`.
    Finished(GameState),
    /// Input ran out while the game was still in progress.
    Abandoned,
}

/// A line that is not two non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("expected two non-negative integers (row col), got {:?}", input)]
pub struct ParseMoveError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Parses `"row col"` (whitespace or comma separated).
#[instrument]
pub fn parse_move(line: &str) -> Result<(usize, usize), ParseMoveError> {
    let err = || ParseMoveError {
        input: line.trim().to_string(),
    };
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }
    Ok((row, col))
}

/// Drives `session` from `input` until it ends or input runs out.
///
/// Prompts, boards and results go to `output`. Rejected or unparsable moves
/// are reported and the same player is prompted again.
#[instrument(skip_all)]
pub fn run_game<R, W>(
    session: &mut GameSession,
    mut input: R,
    output: &mut W,
) -> std::io::Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", session.board_snapshot())?;

    while !session.current_state().is_terminal() {
        let player = session.current_player();
        write!(
            output,
            "{} ({}), enter row and col: ",
            player.name(),
            player.symbol()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!(moves = session.history().len(), "Input ended before the game finished");
            return Ok(PlayOutcome::Abandoned);
        }

        let (row, col) = match parse_move(&line) {
            Ok(coords) => coords,
            Err(err) => {
                debug!(%err, "Unparsable move");
                writeln!(output, "Invalid input: {}. Try again.", err)?;
                continue;
            }
        };

        match session.submit_move(row, col) {
            Ok(state) => {
                writeln!(output, "{}", session.board_snapshot())?;
                match state {
                    GameState::Won(_) => {
                        writeln!(output, "{} wins!", session.current_player().name())?;
                    }
                    GameState::Draw => writeln!(output, "It's a draw!")?,
                    GameState::InProgress => {}
                }
            }
            Err(err) => {
                warn!(%err, row, col, "Move rejected");
                writeln!(output, "Invalid move: {}. Try again.", err)?;
            }
        }
    }

    Ok(PlayOutcome::Finished(session.current_state()))
}

/// Machine-readable end-of-game report.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    /// Final state.
    pub state: GameState,
    /// Winner's name, if any.
    pub winner: Option<String>,
    /// Every placement in order.
    pub moves: Vec<Placement>,
    /// Final board.
    pub board: BoardSnapshot,
}

impl GameSummary {
    /// Summarizes a session as it stands.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            state: session.current_state(),
            winner: session.winner().map(|player| player.name().clone()),
            moves: session.history().to_vec(),
            board: session.board_snapshot(),
        }
    }
}
