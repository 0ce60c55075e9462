//! Morpion engine - tic-tac-toe board model and perfect-play search
//!
//! This library holds everything the game needs that is not I/O.
//!
//! # Architecture
//!
//! - **Board**: cell occupancy, placement and undo, terminal detection
//! - **Rules**: the eight winning lines and outcome evaluation
//! - **Search**: exhaustive minimax returning a score and the best move
//! - **Game**: round controller (menu, modes, turns, restart)
//!
//! # Example
//!
//! ```
//! use morpion_engine::{Board, Outcome, Position, Side, compute_best_move, evaluate_terminal};
//!
//! let mut board = Board::new();
//! board.place(Position::Center, Side::First);
//!
//! assert_eq!(evaluate_terminal(&board), Outcome::InProgress);
//! assert_eq!(compute_best_move(&board), Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use board::Board;
pub use position::Position;
pub use types::{Cell, Outcome, Side};

// Crate-level exports - Rules
pub use rules::{LINES, evaluate_terminal, has_line, is_draw, winning_line};

// Crate-level exports - Search engine
pub use search::{DRAW, LOSS, Minimax, Score, SearchResult, WIN, compute_best_move, self_play};

// Crate-level exports - Round controller
pub use game::{Game, GameMode, Phase};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError};
