//! Terminal UI session.

use crate::app::App;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

/// The terminal, set up for the game.
///
/// Creating one switches to raw mode and the alternate screen with mouse
/// capture on. Dropping it puts the terminal back, on error paths too.
pub struct UiContext {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl UiContext {
    /// Takes over the terminal.
    #[instrument]
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore_terminal();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to create terminal");
            }
        };

        // From here on, Drop restores the terminal.
        let mut context = Self { terminal };
        context.terminal.clear().context("Failed to clear terminal")?;

        info!("Terminal ready");
        Ok(context)
    }

    /// Draws one frame of `app`.
    pub fn draw(&mut self, app: &mut App) -> Result<()> {
        self.terminal
            .draw(|f| {
                app.set_viewport(f.area());
                ui::draw(f, app);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl Drop for UiContext {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal();
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the event loop until the user quits.
///
/// Each event is handled to completion before the next one is read.
#[instrument(skip_all)]
pub fn run(context: &mut UiContext, app: &mut App) -> Result<()> {
    info!("Starting game loop");

    while !app.should_quit() {
        context.draw(app)?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => app.handle_key(key)?,
            Event::Mouse(mouse) => app.handle_mouse(mouse)?,
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }

    info!("Game loop finished");
    Ok(())
}
