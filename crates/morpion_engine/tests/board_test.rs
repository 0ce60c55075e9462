//! Tests for the board model and terminal evaluation.

use morpion_engine::{
    Board, BoardParseError, Cell, LINES, Outcome, Position, Side, evaluate_terminal, winning_line,
};

#[test]
fn test_top_row_first_wins() {
    let mut board = Board::new();
    board.place(Position::new(0, 0), Side::First);
    board.place(Position::new(0, 1), Side::First);
    board.place(Position::new(0, 2), Side::First);
    assert_eq!(evaluate_terminal(&board), Outcome::Win(Side::First));
    assert!(board.winner(Side::First));
    assert!(!board.winner(Side::Second));
}

#[test]
fn test_each_line_for_second() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.place(pos, Side::Second);
        }
        assert_eq!(board.outcome(), Outcome::Win(Side::Second));
        assert_eq!(winning_line(&board), Some((Side::Second, line)));
    }
}

#[test]
fn test_full_board_draw() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(evaluate_terminal(&board), Outcome::Draw);
}

#[test]
fn test_open_board_in_progress() {
    let board: Board = "XOX/OX./O..".parse().unwrap();
    assert_eq!(evaluate_terminal(&board), Outcome::InProgress);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Side::First);
    board.place(Position::Center, Side::Second);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert_eq!(valid.first(), Some(&Position::TopCenter));
}

#[test]
fn test_notation_round_trip() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(board.notation().parse::<Board>().unwrap(), board);
    assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Side::Second));
}

#[test]
fn test_parse_error_display() {
    let err = "XOZ......".parse::<Board>().unwrap_err();
    assert_eq!(err, BoardParseError::UnexpectedChar('Z'));
    assert_eq!(err.to_string(), "Unexpected character 'Z' in board notation");
}

#[test]
fn test_board_serializes() {
    let board: Board = "X../.O./...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
