//! Errors raised by the game state machine.

use derive_more::{Display, Error};

/// Error returned by [`GameState::apply_move`](crate::GameState::apply_move).
///
/// Clicking an occupied square is not an error: that move is simply not
/// accepted. The only failure is an index that does not name a cell, which
/// means the presentation layer and the core disagree about the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The index is outside 0-8.
    #[display("Invalid cell index {_0} (must be 0-8)")]
    InvalidIndex(#[error(not(source))] usize),
}
