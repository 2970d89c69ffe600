//! Tic-tac-toe game logic.
//!
//! The crate holds the whole rule set for a two-player, same-seat game on a
//! 3x3 board. [`GameState`] is the state machine: it takes cell indices
//! (0-8, row-major), rejects moves on occupied squares, and reports a
//! terminal [`Outcome`] after each move. Rendering and input belong to the
//! caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3] {
//!     game.apply_move(index)?;
//! }
//! let result = game.apply_move(2)?;
//! assert_eq!(result.outcome, Outcome::Win(Player::X));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::GameError;
pub use game::{GameState, MoveOutcome};
pub use position::Position;
pub use types::{Board, CELL_COUNT, GameStatus, Outcome, Player, Square};
