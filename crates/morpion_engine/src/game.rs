//! Round controller: menu, modes, turns and restart.
//!
//! `Game` owns the board and decides when the search runs. The search is
//! only ever invoked while a round is in progress and it is the
//! computer's turn.

use super::board::Board;
use super::error::MoveError;
use super::position::Position;
use super::search::Minimax;
use super::types::{Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the second seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// One human against the minimax engine.
    #[default]
    VsComputer,
    /// Two humans sharing the board; the engine is never called.
    TwoHumans,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "Play against the computer",
            Self::TwoHumans => "Two players",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::VsComputer => Self::TwoHumans,
            Self::TwoHumans => Self::VsComputer,
        }
    }
}

/// Round state machine: `Menu -> InProgress -> {Won, Drawn}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Mode selection, no board in play.
    Menu,
    /// Moves are being made.
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// Full board, no line.
    Drawn,
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(side) => Phase::Won(side),
            Outcome::Draw => Phase::Drawn,
            Outcome::InProgress => Phase::InProgress,
        }
    }
}

/// A round of tic-tac-toe.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Side,
    mode: GameMode,
    computer: Side,
    phase: Phase,
    history: Vec<Position>,
}

impl Game {
    /// Creates a game sitting at the menu.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::First,
            mode: GameMode::default(),
            computer: Side::Second,
            phase: Phase::Menu,
            history: Vec::new(),
        }
    }

    /// Leaves the menu and starts a round on a cleared board.
    ///
    /// `computer` is the side the engine plays in [`GameMode::VsComputer`];
    /// it is ignored in two-player mode.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode, computer: Side) {
        info!("Starting round");
        self.mode = mode;
        self.computer = computer;
        self.restart();
    }

    /// Clears the board and starts a new round with the same settings.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn restart(&mut self) {
        debug!("Restarting round");
        self.board.reset();
        self.history.clear();
        self.to_move = Side::First;
        self.phase = Phase::InProgress;
    }

    /// Abandons the round and returns to the menu.
    #[instrument(skip(self))]
    pub fn to_menu(&mut self) {
        self.board.reset();
        self.history.clear();
        self.to_move = Side::First;
        self.phase = Phase::Menu;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the mode of the current (or last) round.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer's side.
    pub fn computer(&self) -> Side {
        self.computer
    }

    /// Returns the round phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True when the engine should play the next move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.phase == Phase::InProgress
            && self.to_move == self.computer
    }

    /// Plays a human move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotInProgress`] outside a round,
    /// [`MoveError::ComputerTurn`] when the engine is to move, and
    /// [`MoveError::SquareOccupied`] for a taken cell.
    #[instrument(skip(self), fields(side = ?self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Phase, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::NotInProgress);
        }
        if self.is_computer_turn() {
            return Err(MoveError::ComputerTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.apply(pos);
        Ok(self.phase)
    }

    /// Runs the search for the computer's side and plays its move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotComputerTurn`] unless
    /// [`Game::is_computer_turn`] holds, and [`MoveError::NoMoveAvailable`]
    /// if the search finds no empty cell.
    #[instrument(skip(self), fields(computer = ?self.computer))]
    pub fn computer_move(&mut self) -> Result<Position, MoveError> {
        if !self.is_computer_turn() {
            return Err(MoveError::NotComputerTurn(self.to_move));
        }

        let pos = Minimax::new(self.computer)
            .best_move(&mut self.board)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.apply(pos);
        Ok(pos)
    }

    fn apply(&mut self, pos: Position) {
        self.board.place(pos, self.to_move);
        self.history.push(pos);
        self.phase = Phase::from(self.board.outcome());
        debug!(side = ?self.to_move, position = ?pos, phase = ?self.phase, "Move applied");

        if self.phase == Phase::InProgress {
            self.to_move = self.to_move.opponent();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
