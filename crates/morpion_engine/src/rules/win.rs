//! Win detection.

use super::super::board::Board;
use super::super::position::Position;
use super::super::types::{Cell, Side};

/// The eight winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `side` occupies all three cells of some line.
pub fn has_line(board: &Board, side: Side) -> bool {
    let mark = Cell::Occupied(side);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the first completed line and its owner.
pub fn winning_line(board: &Board) -> Option<(Side, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| match board.get(a) {
        Cell::Occupied(side) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((side, [a, b, c]))
        }
        _ => None,
    })
}
