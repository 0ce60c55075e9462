//! Tests for the minimax search engine.

use morpion_engine::{
    Board, DRAW, LOSS, Minimax, Outcome, Position, Side, WIN, compute_best_move,
    evaluate_terminal, self_play,
};

fn board(notation: &str) -> Board {
    notation.parse().expect("valid notation")
}

#[test]
fn test_empty_board_opens_top_left() {
    let mut b = Board::new();
    let result = Minimax::default().solve(&mut b);
    assert_eq!(result.score, DRAW);
    assert_eq!(result.best_move, Some(Position::new(0, 0)));
    assert_eq!(b, Board::new());
}

#[test]
fn test_double_threat_beats_plain_block() {
    // First holds (0,0),(0,1); Second holds (1,0),(1,1).
    // Blocking at (0,2) also opens the anti-diagonal, so it wins and
    // comes before (1,2) in row-major order.
    let b = board("XX./OO./...");
    let mut scratch = b;
    let result = Minimax::default().solve(&mut scratch);
    assert_eq!(result.score, WIN);
    assert_eq!(result.best_move, Some(Position::new(0, 2)));
    assert_eq!(compute_best_move(&b), Some(Position::TopRight));
}

#[test]
fn test_edge_reply_to_opposite_corners() {
    let b = board("X../.O./..X");
    assert_eq!(compute_best_move(&b), Some(Position::TopCenter));
}

#[test]
fn test_center_reply_to_corner_opening() {
    let b = board("X../.../...");
    assert_eq!(compute_best_move(&b), Some(Position::Center));
}

#[test]
fn test_lost_position_still_returns_first_cell() {
    // Every reply loses; the tie-break keeps the first empty cell.
    let mut b = board("XX./O../...");
    let result = Minimax::default().solve(&mut b);
    assert_eq!(result.score, LOSS);
    assert_eq!(result.best_move, Some(Position::TopRight));
}

#[test]
fn test_tie_break_is_first_optimal_cell() {
    let mut b = board(".X./.O./...");
    let result = Minimax::default().solve(&mut b);
    assert_eq!(result.score, WIN);
    assert_eq!(result.best_move, Some(Position::TopLeft));
}

#[test]
fn test_best_move_is_always_empty_cell() {
    let boards = [
        "X../.../...",
        ".../.X./...",
        "XO./.../...",
        "XO./.X./...",
        "X.O/.X./..O",
        "XOX/OX./...",
        "XOX/OOX/X..",
    ];
    for notation in boards {
        let b = board(notation);
        assert_eq!(evaluate_terminal(&b), Outcome::InProgress, "{notation}");
        let pos = compute_best_move(&b).expect("open board has a move");
        assert!(b.is_empty(pos), "{notation} -> {pos:?}");
    }
}

#[test]
fn test_compute_best_move_is_idempotent() {
    let b = board("X../.O./..X");
    let snapshot = b;
    let first = compute_best_move(&b);
    let second = compute_best_move(&b);
    assert_eq!(first, second);
    assert_eq!(b, snapshot);

    let mut in_place = b;
    let engine = Minimax::default();
    assert_eq!(engine.best_move(&mut in_place), first);
    assert_eq!(engine.best_move(&mut in_place), first);
    assert_eq!(in_place, snapshot);
}

#[test]
fn test_full_board_returns_none() {
    assert_eq!(compute_best_move(&board("XOX/XOO/OXX")), None);
}

#[test]
fn test_self_play_from_empty_board_is_draw() {
    let mut b = Board::new();
    let moves = self_play(&mut b, Side::First);
    assert_eq!(evaluate_terminal(&b), Outcome::Draw);
    assert_eq!(moves.len(), 9);
    assert_eq!(Minimax::new(Side::First).search(&mut b, true), DRAW);
}

#[test]
fn test_root_value_of_empty_board_is_draw() {
    let mut b = Board::new();
    assert_eq!(Minimax::default().search(&mut b, true), DRAW);
    assert_eq!(Minimax::default().search(&mut b, false), DRAW);
    assert_eq!(b, Board::new());
}

#[test]
fn test_engine_never_loses_to_any_first_reply() {
    // Engine as Second against every human line of play: the human
    // never completes a line.
    fn explore(b: &mut Board) {
        match evaluate_terminal(b) {
            Outcome::Win(side) => assert_eq!(side, Side::Second, "{}", b.notation()),
            Outcome::Draw => {}
            Outcome::InProgress => {
                for pos in Position::valid_moves(b) {
                    b.place(pos, Side::First);
                    if evaluate_terminal(b) == Outcome::InProgress {
                        let reply = compute_best_move(b).expect("open board");
                        b.place(reply, Side::Second);
                        explore(b);
                        b.remove(reply);
                    } else {
                        explore(b);
                    }
                    b.remove(pos);
                }
            }
        }
    }

    explore(&mut Board::new());
}
