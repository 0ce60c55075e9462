//! Application state and logic.

use super::input::{digit_position, move_cursor};
use crate::config::{FirstPlayer, Settings};
use crossterm::event::KeyCode;
use morpion_engine::{Game, GameMode, Phase, Position, Side};
use tracing::{debug, info, instrument, warn};

const END_OF_ROUND_HELP: &str = "Press 'r' to restart, 'm' for the menu or 'q' to quit.";

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    menu_mode: GameMode,
    first_player: FirstPlayer,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application sitting at the menu.
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            menu_mode: *settings.mode(),
            first_player: *settings.first_player(),
            status_message: "Choose a mode and press Enter.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mode highlighted in the menu.
    pub fn menu_mode(&self) -> GameMode {
        self.menu_mode
    }

    /// Who moves first against the computer.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(phase = ?self.game.phase()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.game.phase() {
            Phase::Menu => self.handle_menu_key(key),
            Phase::InProgress | Phase::Won(_) | Phase::Drawn => self.handle_game_key(key),
        }
    }

    /// Handles a click on a board cell.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, pos: Position) {
        if self.game.phase() == Phase::InProgress {
            self.cursor = pos;
            self.play(pos);
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Down => self.menu_mode = self.menu_mode.toggle(),
            KeyCode::Char('1') => self.menu_mode = GameMode::VsComputer,
            KeyCode::Char('2') => self.menu_mode = GameMode::TwoHumans,
            KeyCode::Char('f') => self.first_player = self.first_player.toggle(),
            KeyCode::Enter => self.start(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.game.restart();
                self.cursor = Position::Center;
                self.after_move();
            }
            KeyCode::Char('m') => {
                self.game.to_menu();
                self.status_message = "Choose a mode and press Enter.".to_string();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn start(&mut self) {
        info!(mode = ?self.menu_mode, first_player = ?self.first_player, "Starting game");
        self.game.start(self.menu_mode, self.first_player.computer_side());
        self.cursor = Position::Center;
        self.after_move();
    }

    fn play(&mut self, pos: Position) {
        if self.game.phase() != Phase::InProgress {
            return;
        }
        match self.game.play(pos) {
            Ok(_) => {
                debug!(position = ?pos, "Human move");
                self.after_move();
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Lets the computer answer when it is its turn, then refreshes the
    /// status line.
    fn after_move(&mut self) {
        let mut computer_played = None;
        if self.game.is_computer_turn() {
            match self.game.computer_move() {
                Ok(pos) => computer_played = Some(pos),
                Err(e) => warn!(error = %e, "Computer could not move"),
            }
        }
        self.update_status(computer_played);
    }

    fn update_status(&mut self, computer_played: Option<Position>) {
        let prefix = computer_played
            .map(|pos| format!("Computer played {}. ", pos))
            .unwrap_or_default();

        self.status_message = match self.game.phase() {
            Phase::Menu => "Choose a mode and press Enter.".to_string(),
            Phase::InProgress => match self.game.mode() {
                GameMode::VsComputer => {
                    format!("{}Your move ({}).", prefix, self.game.to_move())
                }
                GameMode::TwoHumans => format!("{} to move.", self.game.to_move()),
            },
            Phase::Won(side) => format!("{}{} {}", prefix, self.winner_text(side), END_OF_ROUND_HELP),
            Phase::Drawn => format!("{}Draw! {}", prefix, END_OF_ROUND_HELP),
        };
    }

    fn winner_text(&self, side: Side) -> String {
        match self.game.mode() {
            GameMode::VsComputer if side == self.game.computer() => "The computer wins!".to_string(),
            GameMode::VsComputer => "You win!".to_string(),
            GameMode::TwoHumans => format!("{} wins!", side),
        }
    }
}
