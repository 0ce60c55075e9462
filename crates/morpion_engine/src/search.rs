//! Exhaustive minimax search.
//!
//! The search explores every continuation of a position, with no pruning
//! and no memoization. Trial moves are played on the caller's board and
//! taken back before returning, so the board is left exactly as it was.

use super::board::Board;
use super::position::Position;
use super::types::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position, from the maximizer's point of view.
pub type Score = i8;

/// The maximizing side has won.
pub const WIN: Score = 1;
/// Full board, no line.
pub const DRAW: Score = 0;
/// The minimizing side has won.
pub const LOSS: Score = -1;

/// Value of the root position and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// One of [`WIN`], [`DRAW`] or [`LOSS`].
    pub score: Score,
    /// Earliest optimal cell in row-major order, `None` on a full board.
    pub best_move: Option<Position>,
}

/// Minimax searcher playing for one side.
///
/// Scores are +1 when `maximizer` has won, -1 when its opponent has won
/// and 0 for a draw. The default plays for [`Side::Second`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Side,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Side::Second)
    }
}

impl Minimax {
    /// Creates a searcher that maximizes for `maximizer`.
    pub fn new(maximizer: Side) -> Self {
        Self { maximizer }
    }

    /// Side this searcher plays for.
    pub fn maximizer(&self) -> Side {
        self.maximizer
    }

    /// Value of `board` with the maximizer to move when `maximizing`
    /// is true, the minimizer otherwise.
    ///
    /// Terminal checks run first at every node, in this order: maximizer
    /// has a line, minimizer has a line, board full.
    pub fn search(&self, board: &mut Board, maximizing: bool) -> Score {
        let mut nodes = 0;
        self.search_counted(board, maximizing, &mut nodes)
    }

    fn search_counted(&self, board: &mut Board, maximizing: bool, nodes: &mut u64) -> Score {
        *nodes += 1;

        if board.winner(self.maximizer) {
            return WIN;
        }
        if board.winner(self.maximizer.opponent()) {
            return LOSS;
        }
        if board.is_full() {
            return DRAW;
        }

        let (side, mut best) = if maximizing {
            (self.maximizer, Score::MIN)
        } else {
            (self.maximizer.opponent(), Score::MAX)
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, side);
            let score = self.search_counted(board, !maximizing, nodes);
            board.remove(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Searches every move for the maximizer and returns the best one.
    ///
    /// Ties go to the earliest cell in row-major order: a later move
    /// replaces the current best only when it scores strictly higher.
    ///
    /// # Panics
    ///
    /// Panics if either side already has a line. The controller must not
    /// ask for a move once the round is over.
    #[instrument(level = "debug", skip(self, board), fields(maximizer = ?self.maximizer, board = %board.notation()))]
    pub fn solve(&self, board: &mut Board) -> SearchResult {
        assert!(
            !board.winner(Side::First) && !board.winner(Side::Second),
            "search requested on a finished board: {}",
            board.notation()
        );

        let mut nodes = 0;
        let mut best: Option<(Score, Position)> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, self.maximizer);
            let score = self.search_counted(board, false, &mut nodes);
            board.remove(pos);

            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, pos));
            }
        }

        let result = match best {
            Some((score, pos)) => SearchResult {
                score,
                best_move: Some(pos),
            },
            None => SearchResult {
                score: DRAW,
                best_move: None,
            },
        };
        debug!(nodes, score = result.score, best_move = ?result.best_move, "Search complete");
        result
    }

    /// Best move for the maximizer, `None` on a full board.
    pub fn best_move(&self, board: &mut Board) -> Option<Position> {
        self.solve(board).best_move
    }
}

/// Best move for [`Side::Second`] on a snapshot of the board.
///
/// The snapshot is copied, so the caller's board is never touched.
pub fn compute_best_move(board: &Board) -> Option<Position> {
    let mut scratch = *board;
    Minimax::default().best_move(&mut scratch)
}

/// Plays the round out with the engine on both sides.
///
/// Each side searches for itself. Moves are applied to `board`; the
/// sequence of positions played is returned.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn self_play(board: &mut Board, mut to_move: Side) -> Vec<Position> {
    let mut moves = Vec::new();

    while !board.outcome().is_terminal() {
        let Some(pos) = Minimax::new(to_move).best_move(board) else {
            break;
        };
        board.place(pos, to_move);
        debug!(side = ?to_move, position = ?pos, "Engine move");
        moves.push(pos);
        to_move = to_move.opponent();
    }

    moves
}
