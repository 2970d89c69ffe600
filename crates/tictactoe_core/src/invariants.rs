//! Invariants of the game state.
//!
//! Invariants are logical properties that must hold after every operation on
//! a [`GameState`]. They are checked with `debug_assert!` inside the state
//! machine and are testable on their own.

use crate::{GameState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Invariant: X moves first and the players never get more than one mark
/// apart.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x <= 5 && o <= 5 && (x == o || x == o + 1)
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// Invariant: the player to move follows from the number of marks.
///
/// While the game is in progress, X is to move after an even number of
/// marks and O after an odd number. Once the game is over, the player who
/// made the last move stays current.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let marks = game.board().count(Player::X) + game.board().count(Player::O);
        let next = if marks % 2 == 0 { Player::X } else { Player::O };
        let expected = if game.status().is_terminal() {
            next.opponent()
        } else {
            next
        };
        marks == game.history().len() && game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Checks every game-state invariant.
pub fn check_all(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !MarkBalanceInvariant::holds(game) {
        violations.push(InvariantViolation {
            description: MarkBalanceInvariant::description(),
        });
    }

    if !TurnOrderInvariant::holds(game) {
        violations.push(InvariantViolation {
            description: TurnOrderInvariant::description(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
