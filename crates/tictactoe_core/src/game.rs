//! The tic-tac-toe state machine.

use crate::invariants;
use crate::rules;
use crate::{Board, GameError, GameStatus, Move, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a call to [`GameState::apply_move`].
///
/// Carries everything the presentation layer needs to re-render: whether
/// the move was taken, the board after the call, who moves next, and the
/// terminal signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// False when the square was occupied or the game was already over.
    pub accepted: bool,
    /// Board contents after the call.
    pub board: Board,
    /// Player to move after the call.
    pub current_player: Player,
    /// Terminal signal after the call.
    pub outcome: Outcome,
}

/// Complete game state: board, player to move, status, and move history.
///
/// Starts with an empty board and X to move. The board is only changed by
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a game by applying `indices` in order.
    ///
    /// Rejected moves (occupied squares, moves after the game ended) are
    /// skipped like any other rejected move. Fails on the first invalid index.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Result<Self, GameError> {
        let mut game = Self::new();
        for index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the terminal signal for the current status.
    pub fn outcome(&self) -> Outcome {
        self.status.into()
    }

    /// Returns the accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// An occupied square, or any move once the game is over, leaves the
    /// state untouched and reports `accepted: false`. An accepted move
    /// either ends the game (the mover stays current) or passes the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Rejected out-of-range cell index");
            return Err(GameError::InvalidIndex(index));
        };

        if self.is_over() {
            debug!(status = ?self.status, "Game is over, move ignored");
            return Ok(self.snapshot(false));
        }

        if !self.board.is_empty(index) {
            debug!(%position, "Square occupied, move ignored");
            return Ok(self.snapshot(false));
        }

        let mover = self.current_player;
        self.board.set(index, Square::Occupied(mover));
        self.history.push(Move::new(mover, position));
        debug!(%position, "Move applied");

        if self.check_winner() {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, "Game won");
        } else if self.is_draw() {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current_player = mover.opponent();
        }

        debug_assert!(
            invariants::check_all(self).is_ok(),
            "{:?}",
            invariants::check_all(self)
        );

        Ok(self.snapshot(true))
    }

    /// True iff one of the 8 lines is filled by a single player.
    pub fn check_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Owner of the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// True iff the board is full and nobody has a line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    fn snapshot(&self, accepted: bool) -> MoveOutcome {
        MoveOutcome {
            accepted,
            board: self.board.clone(),
            current_player: self.current_player,
            outcome: self.outcome(),
        }
    }
}
