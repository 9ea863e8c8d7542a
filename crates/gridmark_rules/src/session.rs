//! Turn-by-turn session state machine.

use super::action::{MoveError, Placement};
use super::board::{Board, BoardSnapshot};
use super::contracts::{assert_invariants, LegalMove};
use super::rules::{Line, RuleEngine};
use super::setup::{check_players, ConfigError, SizePolicy};
use super::state::GameState;
use super::types::{Player, Seat};
use tracing::{debug, info, instrument};

/// One game between two players on a single board.
///
/// The session owns its board and both players. Moves are requested as
/// `(row, col)` and placed with the active player's symbol. A rejected
/// request changes nothing and leaves the same player to move.
///
/// Not meant for concurrent mutation; callers sharing a session across
/// threads must serialize `submit_move` themselves.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) players: [Player; 2],
    pub(crate) active: Seat,
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Placement>,
    pub(crate) winning_line: Option<Line>,
}

impl GameSession {
    /// Creates a session on a `board_size` x `board_size` board.
    ///
    /// Accepts any size of at least 1.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the size is zero or the players' symbols clash or
    /// are blank.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player, board_size: usize) -> Result<Self, ConfigError> {
        Self::with_policy(first, second, board_size, SizePolicy::AnySize)
    }

    /// Creates a session, checking the board size against `policy`.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn with_policy(
        first: Player,
        second: Player,
        board_size: usize,
        policy: SizePolicy,
    ) -> Result<Self, ConfigError> {
        policy.check(board_size)?;
        check_players(&first, &second)?;
        let board = Board::new(board_size)?;
        info!(board_size, ?policy, "Creating new game session");
        Ok(Self {
            players: [first, second],
            active: Seat::First,
            board,
            state: GameState::InProgress,
            history: Vec::new(),
            winning_line: None,
        })
    }

    /// Places the active player's symbol at `(row, col)` and advances the game.
    ///
    /// Returns the state after the move: `Won` if the placement completed a
    /// line, `Draw` if it filled the board, otherwise `InProgress` with the
    /// turn passed to the other player.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the session is already terminal
    /// - `MoveError::OutOfBounds` if either index is `>= size`
    /// - `MoveError::CellOccupied` if the cell already holds a symbol
    #[instrument(skip(self), fields(player = %self.current_player().name(), symbol = %self.current_player().symbol()))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        LegalMove::check(self, row, col)?;

        let symbol = self.current_player().symbol();
        self.board.place(row, col, symbol)?;
        self.history.push(Placement::new(row, col, symbol));

        if let Some(line) = RuleEngine::winning_line(&self.board, symbol) {
            info!(%symbol, %line, moves = self.history.len(), "Game won");
            self.state = GameState::Won(symbol);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            info!(moves = self.history.len(), "Game drawn");
            self.state = GameState::Draw;
        } else {
            self.active = self.active.other();
            debug!(next = %self.current_player().name(), "Turn passed");
        }

        assert_invariants(self);
        Ok(self.state)
    }

    /// Applies a sequence of move requests, stopping at the first rejection.
    #[instrument(skip(self, moves))]
    pub fn replay<I>(mut self, moves: I) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (row, col) in moves {
            self.submit_move(row, col)?;
        }
        Ok(self)
    }

    /// Current lifecycle state.
    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// The player whose symbol the next placement will use.
    ///
    /// Once the game is won this stays on the winner.
    pub fn current_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// The seat holding the turn.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Both players, first mover first.
    pub fn players(&self) -> [&Player; 2] {
        let [first, second] = &self.players;
        [first, second]
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The player who owns the winning symbol.
    pub fn winner(&self) -> Option<&Player> {
        let symbol = self.state.winner()?;
        self.players.iter().find(|player| player.symbol() == symbol)
    }

    /// The line that ended the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Detached copy of the board for rendering.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Successful placements in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Empty cells, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Starts a fresh session with the same players and board size.
    #[instrument(skip(self))]
    pub fn rematch(&self) -> Self {
        info!(board_size = self.board.size(), "Starting rematch");
        Self {
            players: self.players.clone(),
            active: Seat::First,
            board: self.board.cleared(),
            state: GameState::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }
}

/// Creates a session accepting any board size of at least 1.
pub fn new_session(
    player_a: Player,
    player_b: Player,
    board_size: usize,
) -> Result<GameSession, ConfigError> {
    GameSession::new(player_a, player_b, board_size)
}
