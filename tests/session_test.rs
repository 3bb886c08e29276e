//! Tests for session sequencing, terminal detection, and scorekeeping.

use tictactoe::{Outcome, Player, Session, Square};

/// Plays a full round that X wins via the top row.
fn play_x_win(session: &mut Session) -> Option<Outcome> {
    for index in [0, 3, 1, 4] {
        assert_eq!(session.place_mark(index), None);
    }
    session.place_mark(2)
}

#[test]
fn x_moves_first_and_turns_alternate() {
    let mut session = Session::new();
    assert_eq!(session.to_move(), Player::X);

    assert_eq!(session.place_mark(4), None);
    assert_eq!(session.to_move(), Player::O);

    assert_eq!(session.place_mark(0), None);
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn occupied_cell_is_a_silent_no_op() {
    let mut session = Session::new();
    session.place_mark(4);
    let board_before = session.board().clone();

    assert_eq!(session.place_mark(4), None);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(session.scores().wins(Player::X), 0);
    assert_eq!(session.scores().wins(Player::O), 0);
}

#[test]
fn out_of_range_index_is_a_silent_no_op() {
    let mut session = Session::new();
    assert_eq!(session.place_mark(9), None);
    assert_eq!(session.place_mark(usize::MAX), None);
    assert_eq!(session.to_move(), Player::X);
    assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn win_stops_the_round_and_tallies_the_winner() {
    let mut session = Session::new();
    let outcome = play_x_win(&mut session);

    assert_eq!(
        outcome,
        Some(Outcome::Won {
            winner: Player::X,
            line: [0, 1, 2],
        })
    );
    assert!(!session.is_running());
    assert_eq!(session.scores().wins(Player::X), 1);
    assert_eq!(session.scores().wins(Player::O), 0);
}

#[test]
fn finished_round_ignores_further_placements() {
    let mut session = Session::new();
    play_x_win(&mut session);
    let board_before = session.board().clone();

    assert_eq!(session.place_mark(8), None);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.scores().wins(Player::X), 1);
}

#[test]
fn full_board_without_a_line_is_a_tie() {
    let mut session = Session::new();
    // X: 0 2 4 5 7 / O: 1 3 6 8 -> X O X / O X X / O X O
    let moves = [0, 1, 2, 3, 4, 6, 5, 8];
    for index in moves {
        assert_eq!(session.place_mark(index), None);
    }
    assert_eq!(session.place_mark(7), Some(Outcome::Draw));
    assert!(!session.is_running());
    assert_eq!(session.scores().wins(Player::X), 0);
    assert_eq!(session.scores().wins(Player::O), 0);
}

#[test]
fn reset_round_clears_the_board_but_keeps_scores() {
    let mut session = Session::new();
    play_x_win(&mut session);

    session.reset_round();
    assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(session.to_move(), Player::X);
    assert!(session.is_running());
    assert_eq!(session.scores().wins(Player::X), 1);
}

#[test]
fn reset_scores_leaves_the_round_alone() {
    let mut session = Session::new();
    session.place_mark(4);
    session.place_mark(0);

    session.reset_scores();
    assert_eq!(session.scores().wins(Player::X), 0);
    assert_eq!(session.scores().wins(Player::O), 0);
    assert_eq!(session.to_move(), Player::X);
    assert!(session.is_running());
    assert_eq!(session.board().get(4), Some(Square::Occupied(Player::X)));
    assert_eq!(session.board().get(0), Some(Square::Occupied(Player::O)));
}

#[test]
fn tallies_accumulate_across_rounds() {
    let mut session = Session::new();
    play_x_win(&mut session);
    session.reset_round();
    play_x_win(&mut session);

    assert_eq!(session.scores().wins(Player::X), 2);
}
