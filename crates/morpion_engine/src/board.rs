//! 3x3 board storage.

use super::error::BoardParseError;
use super::position::Position;
use super::rules;
use super::types::{Cell, Outcome, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Mutation is deliberately minimal: [`Board::place`] and [`Board::remove`]
/// do not validate, so the search can play and take back trial moves
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if a cell holds no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Puts `side`'s mark on `pos`.
    ///
    /// The caller must have checked [`Board::is_empty`].
    pub fn place(&mut self, pos: Position, side: Side) {
        debug_assert!(self.is_empty(pos), "{pos} is already occupied");
        self.cells[pos.index()] = Cell::Occupied(side);
    }

    /// Clears `pos`, taking back a trial move.
    pub fn remove(&mut self, pos: Position) {
        debug_assert!(!self.is_empty(pos), "{pos} is already empty");
        self.cells[pos.index()] = Cell::Empty;
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns true if `side` owns any of the eight lines.
    ///
    /// Pure inspection, independent of whose turn it is.
    pub fn winner(&self, side: Side) -> bool {
        rules::has_line(self, side)
    }

    /// Win, draw or in progress.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate_terminal(self)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `side`'s mark.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Infers the side to move from the piece counts.
    ///
    /// Returns `None` when the counts break alternating play
    /// (First may lead by at most one).
    pub fn side_to_move(&self) -> Option<Side> {
        match self.count(Side::First) as isize - self.count(Side::Second) as isize {
            0 => Some(Side::First),
            1 => Some(Side::Second),
            _ => None,
        }
    }

    /// Compact notation, rows separated by `/` (e.g. `XO./.X./..O`).
    pub fn notation(&self) -> String {
        let mut result = String::with_capacity(11);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push('/');
            }
            result.push(match cell {
                Cell::Empty => '.',
                Cell::Occupied(side) => side.mark(),
            });
        }
        result
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X` for First, `O` for Second, `.`, `-` or `_`
    /// for empty. `/`, `|` and whitespace are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Side::First),
                'O' | 'o' => Cell::Occupied(Side::Second),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(side) => write!(f, "{}", side.mark())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
