//! Error types for board parsing and round control.

use super::position::Position;
use super::types::Side;

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected character {:?} in board notation", _0)]
    UnexpectedChar(char),

    /// The notation did not describe exactly nine cells.
    #[display("Board notation has {} cells, expected 9", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

/// Error that can occur when a move is requested from the controller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// No round is being played (menu, or the round is over).
    #[display("No round in progress")]
    NotInProgress,

    /// A human tried to move while the computer is to play.
    #[display("It's the computer's turn")]
    ComputerTurn,

    /// The computer was asked to move out of turn.
    #[display("It's not the computer's turn ({} to move)", _0)]
    NotComputerTurn(Side),

    /// The search found no empty cell.
    #[display("No move available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveError {}
