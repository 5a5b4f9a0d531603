//! Pure game logic for gridmark: a two-player turn-based grid game with
//! win/draw detection.
//!
//! The crate exposes a single owner of game state, [`Engine`], with query
//! and mutation operations. Rendering and input dispatch live elsewhere
//! and consume this contract; the engine has no I/O, no async, and no
//! observer mechanism — callers take a fresh [`Engine::snapshot`] after
//! each mutation.
//!
//! # Example
//!
//! ```
//! use gridmark_engine::{Engine, Player};
//!
//! let mut game = Engine::new();
//! assert_eq!(game.state().current_player(), Player::X);
//!
//! assert!(game.make_move(0, 0));
//! assert!(!game.make_move(0, 0)); // occupied: rejected, no state change
//! assert_eq!(game.state().current_player(), Player::O);
//!
//! game.reset();
//! assert_eq!(game.state().current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod rules;
mod types;

pub use engine::{DEFAULT_SIZE, Engine, MoveRejection};
pub use rules::{is_draw, line_winner, scan_winner};
pub use types::{Board, Cell, GameState, GameStatus, Player};
