//! Properties checked over every reachable game.
//!
//! Tic-tac-toe is small enough to walk the whole game tree, so these tests
//! visit every sequence of accepted moves instead of sampling.

use tictactoe_core::{GameState, Outcome, Player, Square, invariants, rules};

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

fn assert_properties(game: &GameState) {
    let board = game.board();
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    assert!(x <= 5 && o <= 5, "too many marks: {:?}", board);
    assert!(x == o || x == o + 1, "unbalanced marks: {:?}", board);
    assert_eq!(invariants::check_all(game), Ok(()));

    let any_line = rules::LINES.iter().any(|&[a, b, c]| {
        let s = board.squares();
        s[a] != Square::Empty && s[a] == s[b] && s[b] == s[c]
    });
    assert_eq!(game.check_winner(), any_line);
    assert_eq!(game.is_draw(), board.is_full() && !any_line);
}

fn walk(game: &GameState, tally: &mut Tally) {
    assert_properties(game);

    match game.outcome() {
        Outcome::None => {}
        Outcome::Win(Player::X) => {
            tally.x_wins += 1;
            return;
        }
        Outcome::Win(Player::O) => {
            tally.o_wins += 1;
            return;
        }
        Outcome::Draw => {
            tally.draws += 1;
            return;
        }
    }

    for index in 0..9 {
        let mut next = game.clone();
        let result = next.apply_move(index).expect("Valid index");

        if game.board().is_empty(index) {
            assert!(result.accepted);
            assert_eq!(next.history().len(), game.history().len() + 1);
            walk(&next, tally);
        } else {
            assert!(!result.accepted);
            assert_eq!(&next, game, "occupied square {} changed state", index);
        }
    }
}

#[test]
fn test_every_game_keeps_invariants() {
    let mut tally = Tally::default();
    walk(&GameState::new(), &mut tally);

    // Well-known totals for the complete tic-tac-toe game tree.
    assert_eq!(
        tally,
        Tally {
            x_wins: 131_184,
            o_wins: 77_904,
            draws: 46_080,
        }
    );
}

#[test]
fn test_reset_restores_initial_state_from_anywhere() {
    let sequences: [&[usize]; 4] = [
        &[],
        &[4],
        &[0, 4, 1, 3, 2],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8],
    ];

    for moves in sequences {
        let mut game = GameState::replay(moves.iter().copied()).expect("Valid replay");
        game.reset();
        assert_eq!(game.board().squares(), &[Square::Empty; 9]);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.outcome(), Outcome::None);
    }
}
