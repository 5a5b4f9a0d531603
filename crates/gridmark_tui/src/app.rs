//! Application state and key handling.

use crossterm::event::KeyCode;
use gridmark_engine::{Engine, GameState, GameStatus};
use tracing::debug;

use crate::input;

/// Main application state: the engine plus the snapshot being rendered.
///
/// The snapshot is replaced after every mutation, so the view always
/// draws from a coherent copy rather than reaching into the engine
/// mid-frame.
pub struct App {
    engine: Engine,
    snapshot: GameState,
    cursor: (usize, usize),
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh `size × size` game.
    pub fn new(size: usize) -> Self {
        let engine = Engine::with_size(size);
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            cursor: (0, 0),
            should_quit: false,
        }
    }

    /// The snapshot the view renders from.
    pub fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    /// Cursor position as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line derived from the current snapshot.
    pub fn status_line(&self) -> String {
        match self.snapshot.status() {
            GameStatus::Won(player) => {
                format!("Player {player} wins! Press 'r' for a new game.")
            }
            GameStatus::Draw => "Game ended in a draw! Press 'r' for a new game.".to_string(),
            GameStatus::InProgress => {
                format!("Current player: {}", self.snapshot.current_player())
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key, self.engine.size());
            }
            _ => {}
        }
    }

    fn place(&mut self) {
        // Placement input is disabled once the game ends; the engine
        // would reject it anyway.
        if self.snapshot.is_game_over() {
            return;
        }
        let (row, col) = self.cursor;
        let accepted = self.engine.make_move(row, col);
        debug!(row, col, accepted, "cell activated");
        self.refresh();
    }

    fn reset(&mut self) {
        debug!("starting new game");
        self.engine.reset();
        self.refresh();
    }

    /// Replaces the rendered snapshot after a mutation.
    fn refresh(&mut self) {
        self.snapshot = self.engine.snapshot();
    }
}
