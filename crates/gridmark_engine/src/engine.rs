//! The game engine: owner of a single mutable [`GameState`].

use crate::invariants::assert_invariants;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 3;

/// Reason a move was rejected.
///
/// The boolean contract of [`Engine::make_move`] collapses these to
/// `false`; the named reasons exist for logs and tests. Rejections are
/// expected inputs, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game already reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// The coordinates fall outside the board.
    #[display("({}, {}) is outside the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// The target cell already holds a mark.
    #[display("({}, {}) is already occupied", _0, _1)]
    CellOccupied(usize, usize),
}

impl std::error::Error for MoveRejection {}

/// Grid game engine.
///
/// Owns exactly one [`GameState`]; all queries and mutations go through
/// it. Each logical game needs its own engine value — there is no shared
/// state anywhere.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Creates an engine with the default 3×3 board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Creates an engine with a `size × size` board.
    ///
    /// The dimension is fixed for the life of the engine; [`reset`] keeps
    /// it. Size is not validated, matching the construction contract: a
    /// 0×0 board simply rejects every move.
    ///
    /// [`reset`]: Engine::reset
    #[instrument]
    pub fn with_size(size: usize) -> Self {
        Self {
            state: GameState::new(size),
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.state.board().size()
    }

    /// Borrows the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    ///
    /// The copy is detached: it does not change when the engine advances,
    /// and nothing done to it reaches the engine.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Attempts to place the current player's mark at `(row, col)`.
    ///
    /// Returns `true` when the move is accepted. A rejected move returns
    /// `false` and leaves the state untouched; the reason is logged at
    /// debug level.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_move(row, col) {
            Ok(()) => true,
            Err(rejection) => {
                debug!(%rejection, "move rejected");
                false
            }
        }
    }

    /// [`make_move`] with a named rejection reason.
    ///
    /// Rejection conditions are checked in order: the game is over, the
    /// coordinates are out of bounds, the cell is occupied. No partial
    /// mutation occurs on rejection.
    ///
    /// [`make_move`]: Engine::make_move
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<(), MoveRejection> {
        if self.state.is_game_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.state.board().in_bounds(row, col) {
            return Err(MoveRejection::OutOfBounds(row, col));
        }
        if !self.state.board().is_empty(row, col) {
            return Err(MoveRejection::CellOccupied(row, col));
        }

        let mover = self.state.current_player();
        self.state.place(row, col, mover);

        // Only lines through the played cell can have been completed.
        if rules::line_winner(self.state.board(), row, col).is_some() {
            // Terminal state: the mover stays the current player.
            self.state.set_status(GameStatus::Won(mover));
        } else if self.state.board().is_full() {
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.advance_turn();
        }

        debug!(board = %self.state.board(), status = ?self.state.status(), "move accepted");
        assert_invariants(&self.state);

        Ok(())
    }

    /// Discards the current game and starts a fresh one on a board of the
    /// same size. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new(self.size());
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
