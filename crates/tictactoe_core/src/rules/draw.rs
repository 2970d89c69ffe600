//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// A full board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
