//! Integration tests: full games driven through the session turn loop

use hexgame_cli::player::{MoveSource, NoValidMoves};
use hexgame_cli::session::Session;
use hexgame_core::{Color, Grid, Move, Outcome, Pos};
use std::collections::VecDeque;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Move source that replays a fixed script, then reports no valid moves
struct Scripted {
    moves: VecDeque<Move>,
}

impl Scripted {
    fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self, view: &Grid) -> Result<Move, NoValidMoves> {
        if view.is_full() {
            return Err(NoValidMoves);
        }
        self.moves.pop_front().ok_or(NoValidMoves)
    }
}

fn at(x: i64, y: i64) -> Move {
    Move::position(x, y).unwrap()
}

fn session_3x3(red: &[Move], blue: &[Move], first: Color) -> Session {
    let mut session = Session::new();
    session.board_size(3, 3).unwrap();
    session.assign(Color::Red, Box::new(Scripted::new(red))).unwrap();
    session.assign(Color::Blue, Box::new(Scripted::new(blue))).unwrap();
    session.first_mover(first);
    session
}

// ============================================================================
// FULL GAMES
// ============================================================================

#[test]
fn test_red_wins_with_diagonal_chain() {
    let mut session = session_3x3(
        &[at(0, 2), at(1, 1), at(2, 0)],
        &[at(0, 0), at(0, 1)],
        Color::Red,
    );

    let winner = session.play().unwrap();
    assert_eq!(winner, Color::Red);

    // The winning chain is reported goal edge first
    let path = session.board().winning_path(Color::Red).unwrap();
    assert_eq!(path, vec![Pos::new(2, 0), Pos::new(1, 1), Pos::new(0, 2)]);
}

#[test]
fn test_rejected_placement_retries_same_color() {
    // Red's second scripted move hits Blue's cell and is retried with the
    // next scripted move without costing Red the turn
    let mut session = session_3x3(
        &[at(0, 2), at(0, 0), at(1, 1), at(2, 0)],
        &[at(0, 0), at(0, 1)],
        Color::Red,
    );

    assert_eq!(session.play().unwrap(), Color::Red);
}

#[test]
fn test_out_of_bounds_placement_retries_same_color() {
    let mut session = session_3x3(
        &[at(0, 2), at(7, 7), at(1, 1), at(2, 0)],
        &[at(0, 0), at(0, 1)],
        Color::Red,
    );

    assert_eq!(session.play().unwrap(), Color::Red);
}

#[test]
fn test_concession_ends_the_game_for_the_opponent() {
    let mut session = session_3x3(&[at(1, 1)], &[Move::concede()], Color::Red);

    let winner = session.play().unwrap();
    assert_eq!(winner, Color::Blue.opponent());
    assert_eq!(
        session.board().clone().check_winner().unwrap(),
        Outcome::WonBy(Color::Red)
    );
}

#[test]
fn test_exhausted_move_source_loses_immediately() {
    // Blue has no scripted moves left after its first placement
    let mut session = session_3x3(
        &[at(0, 2), at(1, 2), at(2, 2)],
        &[at(0, 0)],
        Color::Red,
    );

    assert_eq!(session.play().unwrap(), Color::Red);
}

#[test]
fn test_single_cell_game() {
    let mut session = Session::new();
    session.board_size(1, 1).unwrap();
    session.assign(Color::Blue, Box::new(Scripted::new(&[at(0, 0)]))).unwrap();
    session.assign(Color::Red, Box::new(Scripted::new(&[]))).unwrap();
    session.first_mover(Color::Blue);

    // One placement spans both of Blue's edges
    assert_eq!(session.play().unwrap(), Color::Blue);
}

// ============================================================================
// SETUP ERRORS
// ============================================================================

#[test]
fn test_each_color_is_assigned_once() {
    let mut session = Session::new();
    session.board_size(2, 2).unwrap();
    session.assign(Color::Red, Box::new(Scripted::new(&[]))).unwrap();
    assert!(session.assign(Color::Red, Box::new(Scripted::new(&[]))).is_err());
    // The other color is still free
    session.assign(Color::Blue, Box::new(Scripted::new(&[]))).unwrap();
}

#[test]
fn test_play_requires_a_first_mover() {
    let mut session = Session::new();
    session.board_size(2, 2).unwrap();
    session.assign(Color::Red, Box::new(Scripted::new(&[]))).unwrap();
    session.assign(Color::Blue, Box::new(Scripted::new(&[]))).unwrap();

    assert!(session.play().is_err());
}

#[test]
fn test_board_size_is_validated_through_the_session() {
    let mut session = Session::new();
    assert!(session.board_size(0, 3).is_err());
    session.board_size(3, 3).unwrap();
    assert!(session.board_size(3, 3).is_err());
}
