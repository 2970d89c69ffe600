//! End-to-end tests of the presentation adapter driving the game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{App, BoardLayout, Dialog, ScriptFormat, run_script};
use tictactoe_core::{GameState, Outcome, Player, Square};

fn screen() -> Rect {
    Rect::new(0, 0, 100, 30)
}

fn click_cell(app: &mut App, index: usize) {
    let cell = BoardLayout::for_screen(screen())
        .cell(index)
        .expect("Cell exists");
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: cell.x + cell.width / 2,
        row: cell.y + cell.height / 2,
        modifiers: KeyModifiers::NONE,
    })
    .expect("Click handled");
}

#[test]
fn test_clicking_through_a_win_and_a_new_game() {
    let mut app = App::new(true);
    app.set_viewport(screen());

    for index in [0, 4, 1, 3, 2] {
        click_cell(&mut app, index);
    }

    assert_eq!(app.dialog(), Some(Dialog::Winner(Player::X)));
    assert_eq!(app.game().outcome(), Outcome::Win(Player::X));

    // Acknowledge with a click, then play again from a clean board.
    click_cell(&mut app, 8);
    assert_eq!(app.game(), &GameState::new());

    click_cell(&mut app, 8);
    assert_eq!(
        app.game().board().get(8),
        Some(Square::Occupied(Player::X))
    );
}

#[test]
fn test_mixed_keys_and_clicks_reach_a_draw() {
    let mut app = App::new(true);
    app.set_viewport(screen());

    for (turn, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
        if turn % 2 == 0 {
            click_cell(&mut app, index);
        } else {
            let key = char::from_digit(index as u32 + 1, 10).expect("Digit");
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE))
                .expect("Key handled");
        }
    }

    assert_eq!(app.dialog(), Some(Dialog::Draw));
    assert!(app.game().is_draw());
}

#[test]
fn test_right_click_does_nothing() {
    let mut app = App::new(true);
    app.set_viewport(screen());
    let cell = BoardLayout::for_screen(screen()).cell(4).expect("Cell exists");

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: cell.x,
        row: cell.y,
        modifiers: KeyModifiers::NONE,
    })
    .expect("Click handled");

    assert_eq!(app.game(), &GameState::new());
}

#[test]
fn test_script_matches_interactive_play() {
    let moves = [2, 4, 6, 0, 8, 5, 7];
    let mut out = Vec::new();
    let scripted = run_script(&moves, true, ScriptFormat::Text, &mut out).expect("Script ran");

    let mut app = App::new(true);
    app.set_viewport(screen());
    for index in moves {
        click_cell(&mut app, index);
    }

    assert_eq!(app.game(), &scripted);
    assert_eq!(scripted.outcome(), Outcome::Win(Player::X));
}
