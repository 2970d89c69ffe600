//! UI rendering using ratatui.

mod board;

use crate::app::{App, Dialog};
use crate::layout::{BoardLayout, ScreenLayout, center_rect};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub use board::render_board;

const HELP: &str = "1-9 or click: move | Arrows + Enter: move | R: Restart | Q: Quit";

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let screen = ScreenLayout::new(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, screen.title);

    let layout = BoardLayout::new(screen.board);
    render_board(f, &layout, app.game().board(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, screen.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, screen.help);

    if let Some(dialog) = app.dialog() {
        render_dialog(f, screen.board, dialog);
    }
}

/// Draws the end-of-game dialog over the middle of `area`.
fn render_dialog(f: &mut Frame, area: Rect, dialog: Dialog) {
    let popup = center_rect(area, 32, 6);

    let text = vec![
        Line::from(""),
        Line::from(dialog.message()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from("[ Enter ] OK").style(Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title())
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
