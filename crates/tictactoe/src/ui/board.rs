//! Tic-tac-toe board rendering.

use crate::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tictactoe_core::{Board, CELL_COUNT, Player, Position, Square};

/// Renders the board into the cells of `layout`, highlighting `cursor`.
pub fn render_board(f: &mut Frame, layout: &BoardLayout, board: &Board, cursor: Position) {
    let [top, bottom, left, right] = layout.separators();
    render_separator(f, top);
    render_separator(f, bottom);
    render_vertical_sep(f, left);
    render_vertical_sep(f, right);

    for index in 0..CELL_COUNT {
        if let (Some(area), Some(square)) = (layout.cell(index), board.get(index)) {
            let selected = cursor.to_index() == index;
            render_square(f, area, square, index, selected);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, square: Square, index: usize, selected: bool) {
    let (text, style) = match square {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        style.bg(Color::White)
    } else {
        style
    };

    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(text));

    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}
