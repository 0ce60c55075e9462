//! Draw detection.

use super::super::board::Board;
use super::super::types::Side;
use super::win::has_line;

/// A full board on which neither side owns a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_line(board, Side::First) && !has_line(board, Side::Second)
}
