//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Moves first, marked `X`.
    #[strum(serialize = "first", serialize = "x")]
    First,
    /// Moves second, marked `O`. The computer's side by default.
    #[strum(serialize = "second", serialize = "o")]
    Second,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns the mark drawn for this side.
    pub fn mark(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a side's mark.
    Occupied(Side),
}

/// Result of inspecting a board.
///
/// Derived from the board on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side owns a full line.
    Win(Side),
    /// Full board, no line.
    Draw,
    /// Empty cells remain and nobody has won.
    InProgress,
}

impl Outcome {
    /// Returns true once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent().opponent(), Side::Second);
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("first".parse::<Side>().unwrap(), Side::First);
        assert_eq!("O".parse::<Side>().unwrap(), Side::Second);
        assert_eq!("Second".parse::<Side>().unwrap(), Side::Second);
        assert!("third".parse::<Side>().is_err());
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(Outcome::Win(Side::First).is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
