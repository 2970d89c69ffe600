//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictactoe_core`]. This crate is the presentation
//! layer around them:
//!
//! - **App**: turns key presses and mouse clicks into cell indices
//! - **Layout**: maps terminal coordinates to cells, shared with rendering
//! - **UI**: ratatui rendering of the board, status, and end-of-game dialogs
//! - **Script**: headless play from a list of indices

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
mod logging;
mod script;
mod tui;
pub mod ui;

pub use app::{App, Dialog};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use input::{digit_to_index, move_cursor};
pub use layout::{BOARD_HEIGHT, BOARD_WIDTH, BoardLayout, ScreenLayout};
pub use logging::{LogTarget, init_tracing};
pub use script::{ScriptFormat, run_script};
pub use tui::{UiContext, run};
