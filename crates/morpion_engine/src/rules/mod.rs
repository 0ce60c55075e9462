//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! board storage so the search, the controller and the UI share one
//! definition of a finished game.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{LINES, has_line, winning_line};

use super::board::Board;
use super::types::{Outcome, Side};

/// Classifies a board as won, drawn or still in progress.
///
/// First's lines are checked before Second's. On a legal board at most
/// one side can own a line.
pub fn evaluate_terminal(board: &Board) -> Outcome {
    if has_line(board, Side::First) {
        Outcome::Win(Side::First)
    } else if has_line(board, Side::Second) {
        Outcome::Win(Side::Second)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
