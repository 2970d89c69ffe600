//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as a flat array of 9 squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Writes a square. Callers check bounds first.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show the 1-9 key that selects them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Terminal signal reported to the presentation layer after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    None,
    /// The given player completed a line.
    Win(Player),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// True when the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::None)
    }
}

impl From<GameStatus> for Outcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Outcome::None,
            GameStatus::Won(player) => Outcome::Win(player),
            GameStatus::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::None => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_count_marks() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(4, Square::Occupied(Player::O));
        board.set(8, Square::Occupied(Player::X));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_display_labels_empty_squares() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X));
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(Outcome::from(GameStatus::InProgress), Outcome::None);
        assert_eq!(
            Outcome::from(GameStatus::Won(Player::O)),
            Outcome::Win(Player::O)
        );
        assert_eq!(Outcome::from(GameStatus::Draw), Outcome::Draw);
        assert_eq!(Outcome::Win(Player::X).to_string(), "Player X wins");
    }
}
