//! Position analysis printed by the `solve` command.

use anyhow::{Result, bail};
use morpion_engine::{Board, Minimax, Outcome, Position, Score, Side, evaluate_terminal};
use serde::Serialize;
use tracing::instrument;

/// A cell chosen by the search, with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Named position.
    pub position: Position,
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

impl From<Position> for MoveReport {
    fn from(position: Position) -> Self {
        Self {
            position,
            row: position.row(),
            col: position.col(),
        }
    }
}

/// Result of analysing one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Board in compact notation.
    pub board: String,
    /// Terminal state of the board as given.
    pub outcome: Outcome,
    /// Side the search played for; absent on a finished board.
    pub side: Option<Side>,
    /// +1 win, 0 draw, -1 loss for `side`; absent on a finished board.
    pub score: Option<Score>,
    /// Best move for `side`; absent on a finished board.
    pub best_move: Option<MoveReport>,
}

impl SolveReport {
    /// Analyses `board` for `side`, or for the side inferred from the
    /// piece counts.
    ///
    /// A finished board is reported as is, without searching.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn compute(board: &Board, side: Option<Side>) -> Result<Self> {
        let outcome = evaluate_terminal(board);
        if outcome.is_terminal() {
            return Ok(Self {
                board: board.notation(),
                outcome,
                side: None,
                score: None,
                best_move: None,
            });
        }

        let Some(side) = side.or_else(|| board.side_to_move()) else {
            bail!(
                "Cannot tell whose turn it is on {} (X may lead by at most one); pass --side",
                board.notation()
            );
        };

        let mut scratch = *board;
        let result = Minimax::new(side).solve(&mut scratch);
        Ok(Self {
            board: board.notation(),
            outcome,
            side: Some(side),
            score: Some(result.score),
            best_move: result.best_move.map(MoveReport::from),
        })
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        writeln!(f, "Outcome: {}", self.outcome)?;
        if let (Some(side), Some(score)) = (self.side, self.score) {
            let verdict = match score {
                1 => "wins",
                -1 => "loses",
                _ => "draws",
            };
            writeln!(f, "{} to move {} with perfect play ({:+})", side, verdict, score)?;
        }
        if let Some(mv) = self.best_move {
            writeln!(f, "Best move: {} (row {}, col {})", mv.position, mv.row, mv.col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_infers_side_and_finds_win() {
        let report = SolveReport::compute(&board("XX./OO./X.."), None).unwrap();
        assert_eq!(report.side, Some(Side::Second));
        assert_eq!(report.score, Some(1));
        assert_eq!(
            report.best_move,
            Some(MoveReport {
                position: Position::MiddleRight,
                row: 1,
                col: 2
            })
        );
    }

    #[test]
    fn test_explicit_side_on_unbalanced_board() {
        assert!(SolveReport::compute(&board("XX./OO./..."), None).is_ok());
        assert!(SolveReport::compute(&board("XXX/.../..."), None).is_ok());
        assert!(SolveReport::compute(&board("XX./.../..."), None).is_err());

        let report = SolveReport::compute(&board("XX./.../..."), Some(Side::Second)).unwrap();
        assert_eq!(report.score, Some(-1));
        assert_eq!(report.best_move.map(|m| m.position), Some(Position::TopRight));
    }

    #[test]
    fn test_finished_board_is_not_searched() {
        let report = SolveReport::compute(&board("XXX/OO./..."), None).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Side::First));
        assert_eq!(report.score, None);
        assert_eq!(report.best_move, None);
    }

    #[test]
    fn test_text_and_json() {
        let report = SolveReport::compute(&board("X../.O./..X"), None).unwrap();
        let text = report.to_string();
        assert!(text.contains("O to move draws with perfect play (+0)"));
        assert!(text.contains("Best move: Top-center (row 0, col 1)"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_move"]["position"], "TopCenter");
        assert_eq!(json["score"], 0);
        assert_eq!(json["outcome"], "InProgress");
    }
}
