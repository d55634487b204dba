//! End-to-end tests through the public API: full games on small boards,
//! the ko cycle, and solved minimax values.

use go_minimax::board::{Color, Vertex};
use go_minimax::position::{GameState, Move, MoveError, Score, parse_coord};
use go_minimax::search::{Minimax, best_move_value};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play vertex names in order, Black first. "pass" passes.
fn setup<const N: usize>(moves: &[&str]) -> GameState<N> {
    let mut state = GameState::new();
    for name in moves {
        let mv = parse_coord::<N>(name).unwrap_or_else(|| panic!("bad vertex {name}"));
        if let Err(err) = state.try_play(mv) {
            panic!("illegal move {name} in setup: {err}");
        }
    }
    state
}

/// The ko shape in the top-left of a 5x5 board, White to move after Black
/// has just taken at C4.
///
/// ```text
/// 5 . X O . .
/// 4 X . X O .
/// 3 . X O . .
/// ```
fn ko_position() -> GameState<5> {
    let mut state = setup::<5>(&["B5", "C5", "A4", "D4", "B3", "C3", "E1", "B4"]);
    assert_eq!(state.try_play(Move::Place((1, 2))), Ok(1));
    state
}

// =============================================================================
// Scoring scenarios on 2x2
// =============================================================================

#[test]
fn test_white_captures_two_stones() {
    let mut state = GameState::<2>::new();
    assert!(state.play_stone(0, 0));
    assert!(state.play_stone(1, 0));
    assert!(state.play_stone(0, 1));
    assert!(state.play_stone(1, 1));

    assert_eq!(state.board()[(0, 0)], Vertex::Empty);
    assert_eq!(state.board()[(0, 1)], Vertex::Empty);
    assert_eq!(state.captures(Color::White), 2);
    assert_eq!(state.territory_score(), Score { black: 0, white: 4 });
    assert_eq!(state.area_score(), Score { black: 0, white: 2 });
}

#[test]
fn test_black_captures_lone_white_stone() {
    let mut state = GameState::<2>::new();
    assert!(!state.pass_turn());
    assert!(state.play_stone(1, 0));
    assert!(state.play_stone(0, 0));
    assert!(!state.pass_turn());
    assert!(state.play_stone(1, 1));

    assert_eq!(state.board()[(1, 0)], Vertex::Empty);
    assert_eq!(state.captures(Color::Black), 1);
    assert_eq!(state.territory_score(), Score { black: 3, white: 0 });
}

#[test]
fn test_capture_spares_neighbouring_live_group() {
    // C3 touches two White stones: B3 has no liberty left, C4 still has C5.
    let mut state = setup::<5>(&["B4", "C4", "B2", "B3", "A3", "E1"]);
    assert_eq!(state.try_play(Move::Place((2, 2))), Ok(1));
    assert_eq!(state.board()[(2, 1)], Vertex::Empty);
    assert_eq!(state.board()[(1, 2)], Vertex::White);
    assert_eq!(state.captures(Color::Black), 1);
}

#[test]
fn test_scoring_does_not_mutate() {
    let state = setup::<3>(&["B2", "A1", "C1", "pass", "A2"]);
    let before = state.clone();
    let first = state.territory_score();
    let area = state.area_score();
    assert_eq!(state.territory_score(), first);
    assert_eq!(state.area_score(), area);
    assert_eq!(state, before);
}

// =============================================================================
// Illegal moves
// =============================================================================

#[test]
fn test_occupied_point_rejected() {
    let mut state = setup::<3>(&["B2", "A1"]);
    let before = state.clone();
    assert!(!state.play_stone(1, 1));
    assert!(!state.play_stone(2, 0));
    assert_eq!(state, before);
}

#[test]
fn test_self_capture_rolls_back() {
    // White's stone at A1 would fill its own last liberty.
    let mut state = setup::<3>(&["A2", "C3", "B1"]);
    let before = state.clone();
    assert_eq!(state.try_play(Move::Place((2, 0))), Err(MoveError::Suicide));
    assert_eq!(state, before);
    assert_eq!(state.board()[(2, 0)], Vertex::Empty);
    assert_eq!(state.captures(Color::White), 0);
}

#[test]
fn test_group_self_capture_rolls_back() {
    // White's A2 would join A3 into a group with no liberties left.
    // 3 O X .
    // 2 . X .
    // 1 X . .
    let mut state = setup::<3>(&["B3", "A3", "B2", "pass", "A1"]);
    let before = state.clone();
    assert_eq!(state.try_play(Move::Place((1, 0))), Err(MoveError::Suicide));
    assert_eq!(state, before);
    assert_eq!(state.board()[(0, 0)], Vertex::White);
}

#[test]
fn test_ko_recapture_rejected_then_allowed() {
    let mut state = ko_position();
    assert_eq!(state.ko_point(), Some((1, 2)));

    let before = state.clone();
    assert!(!state.play_stone(1, 1));
    assert_eq!(state, before);
    assert_eq!(state.board()[(1, 2)], Vertex::Black);

    // One unrelated move each, then the recapture is fine.
    assert!(state.play_stone(4, 0));
    assert!(state.play_stone(3, 0));
    assert_eq!(state.try_play(Move::Place((1, 1))), Ok(1));
    assert_eq!(state.board()[(1, 2)], Vertex::Empty);
    assert_eq!(state.captures(Color::White), 1);
    assert_eq!(state.ko_point(), Some((1, 1)));
}

#[test]
fn test_ko_rejection_does_not_touch_counters() {
    let mut state = ko_position();
    let black_captures = state.captures(Color::Black);
    assert_eq!(state.try_play(Move::Place((1, 1))), Err(MoveError::Ko));
    assert_eq!(state.captures(Color::Black), black_captures);
    assert_eq!(state.captures(Color::White), 0);
    assert_eq!(state.to_move(), Color::White);
}

// =============================================================================
// Passing
// =============================================================================

#[test]
fn test_two_passes_end_the_game() {
    let mut state = setup::<3>(&["B2", "A1", "C3"]);
    assert!(!state.pass_turn());
    assert!(!state.is_finished());
    assert!(state.pass_turn());
    assert!(state.is_finished());
}

#[test]
fn test_isolated_passes_do_not_end_the_game() {
    let mut state = GameState::<3>::new();
    assert!(!state.pass_turn());
    assert!(state.play_stone(1, 1));
    assert!(!state.pass_turn());
    assert!(state.play_stone(0, 0));
    assert!(!state.is_finished());
}

// =============================================================================
// Minimax
// =============================================================================

#[test]
fn test_minimax_one_by_one() {
    assert_eq!(best_move_value(&GameState::<1>::new()), 0);
}

#[test]
fn test_minimax_two_by_two() {
    assert_eq!(best_move_value(&GameState::<2>::new()), 1);
}

#[test]
fn test_minimax_three_by_three() {
    assert_eq!(best_move_value(&GameState::<3>::new()), 5);
}

#[test]
fn test_best_move_reaches_search_value() {
    let state = GameState::<2>::new();
    let mut search = Minimax::new();
    let (mv, value) = search.best_move(&state);
    assert_eq!(value, 1);
    assert!(search.stats().nodes > 1);

    let mut child = state.clone();
    assert!(child.try_play(mv).is_ok());
    assert_eq!(go_minimax::search::evaluate(&child, 1, i32::MIN, i32::MAX), value);
}

#[test]
fn test_finished_game_value_is_black_area() {
    let state = setup::<3>(&["B2", "A1", "pass", "pass"]);
    assert!(state.is_finished());
    assert_eq!(best_move_value(&state), 1);
}

#[test]
fn test_best_move_on_finished_game_is_pass() {
    let mut state = GameState::<2>::new();
    assert!(state.play_stone(0, 0));
    assert!(!state.pass_turn());
    assert!(state.pass_turn());

    let mut search = Minimax::new();
    assert_eq!(search.best_move(&state), (Move::Pass, 1));
    assert_eq!(best_move_value(&state), 1);
    assert_eq!(search.stats().nodes, 1);
    assert_eq!(search.stats().terminals, 1);
}
