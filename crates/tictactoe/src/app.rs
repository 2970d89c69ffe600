//! Application state and input handling.

use crate::input::{digit_to_index, move_cursor};
use crate::layout::BoardLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{GameError, GameState, MoveOutcome, Outcome, Player, Position};
use tracing::{debug, info, instrument};

/// Modal dialog shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The given player won.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl Dialog {
    /// Dialog for a terminal outcome, `None` while play continues.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::None => None,
            Outcome::Win(player) => Some(Dialog::Winner(player)),
            Outcome::Draw => Some(Dialog::Draw),
        }
    }

    /// Window title.
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Winner(_) => "Winner",
            Dialog::Draw => "Draw",
        }
    }

    /// Body text.
    pub fn message(&self) -> String {
        match self {
            Dialog::Winner(player) => format!("Player {} Wins!", player),
            Dialog::Draw => "The Game Is A Draw!".to_string(),
        }
    }
}

/// Main application state.
///
/// Owns the [`GameState`] and translates key presses and clicks into cell
/// indices for it.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    dialog: Option<Dialog>,
    status_message: String,
    auto_reset: bool,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(auto_reset: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            dialog: None,
            status_message: turn_message(Player::X),
            auto_reset,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Open dialog, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the frame area so clicks can be mapped to cells.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.dialog.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => self.acknowledge(),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor.to_index())?;
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.play(index)?;
                }
            }
            code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles a mouse event. Only left clicks do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), GameError> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        if self.dialog.is_some() {
            self.acknowledge();
            return Ok(());
        }

        self.click(mouse.column, mouse.row)?;
        Ok(())
    }

    /// Maps a click at a terminal coordinate to a cell and plays it.
    ///
    /// Returns `None` when the click missed the board.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) -> Result<Option<MoveOutcome>, GameError> {
        match BoardLayout::for_screen(self.viewport).cell_at(column, row) {
            Some(index) => self.play(index).map(Some),
            None => {
                debug!("Click outside the board");
                Ok(None)
            }
        }
    }

    /// Forwards a cell index to the game and updates what is shown.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let result = self.game.apply_move(index)?;

        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }

        if !result.accepted {
            if !self.game.is_over() {
                self.status_message = format!(
                    "Square {} is taken. {}",
                    index + 1,
                    turn_message(result.current_player)
                );
            }
            return Ok(result);
        }

        match Dialog::from_outcome(result.outcome) {
            Some(dialog) => {
                info!(?dialog, "Game over");
                self.status_message = result.outcome.to_string();
                self.dialog = Some(dialog);
            }
            None => {
                self.status_message = turn_message(result.current_player);
            }
        }

        Ok(result)
    }

    /// Closes the end-of-game dialog.
    ///
    /// With auto-reset on, a new game starts right away. Otherwise the
    /// finished board stays up until the player restarts.
    pub fn acknowledge(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        debug!(?dialog, auto_reset = self.auto_reset, "Dialog acknowledged");

        if self.auto_reset {
            self.restart();
        } else {
            self.status_message = format!("{}. Press r to play again.", self.game.outcome());
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        self.game.reset();
        self.dialog = None;
        self.cursor = Position::Center;
        self.status_message = turn_message(self.game.current_player());
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
