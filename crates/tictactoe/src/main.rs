//! Tic-tac-toe command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe::{
    App, Cli, Command, LogTarget, ScriptFormat, Settings, UiContext, init_tracing, run_script,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)?;
    if cli.manual_reset {
        settings = settings.with_auto_reset(false);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(settings),
        Command::Script { json, moves } => run_headless(settings, &moves, json),
    }
}

/// Run the terminal UI
fn run_tui(settings: Settings) -> Result<()> {
    // Log to a file so the output does not draw over the board
    init_tracing(&settings, LogTarget::File)?;
    info!(auto_reset = *settings.auto_reset(), "Starting tic-tac-toe");

    let mut app = App::new(*settings.auto_reset());
    let mut context = UiContext::new()?;
    tictactoe::run(&mut context, &mut app)
}

/// Run a scripted game and print the result
fn run_headless(settings: Settings, moves: &[usize], json: bool) -> Result<()> {
    init_tracing(&settings, LogTarget::Stderr)?;

    let format = if json {
        ScriptFormat::Json
    } else {
        ScriptFormat::Text
    };
    let stdout = std::io::stdout();
    run_script(moves, *settings.auto_reset(), format, &mut stdout.lock())?;
    Ok(())
}
