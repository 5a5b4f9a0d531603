//! First-class invariants over [`GameState`].
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and testable independently.

use crate::rules;
use crate::types::{GameState, GameStatus, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants compose
/// into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn mark_counts(state: &GameState) -> (usize, usize) {
    let x = state
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.player() == Some(Player::X))
        .count();
    let o = state
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.player() == Some(Player::O))
        .count();
    (x, o)
}

/// Invariant: mark counts stay balanced.
///
/// X moves first, so `#X - #O` is 0 or 1 at every reachable state.
pub struct MarkParityInvariant;

impl Invariant<GameState> for MarkParityInvariant {
    fn holds(state: &GameState) -> bool {
        let (x, o) = mark_counts(state);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "mark parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "mark counts differ by at most one, X leading"
    }
}

/// Invariant: while in progress, the player to move matches the parity.
///
/// Equal counts mean X is to move; X one ahead means O is to move. Not
/// checked on terminal states, where the player is frozen at the mover.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_game_over() {
            return true;
        }
        let (x, o) = mark_counts(state);
        let expected = if x == o { Player::X } else { Player::O };
        let valid = state.current_player() == expected;
        if !valid {
            warn!(x, o, current = %state.current_player(), "turn parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "player to move matches the mark parity"
    }
}

/// Invariant: a declared winner actually holds a complete line.
pub struct WinnerHasLineInvariant;

impl Invariant<GameState> for WinnerHasLineInvariant {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Won(winner) => {
                let valid = rules::scan_winner(state.board()) == Some(winner);
                if !valid {
                    warn!(%winner, "declared winner holds no line");
                }
                valid
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "a declared winner holds a complete line"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkParityInvariant, TurnParityInvariant, WinnerHasLineInvariant);

/// Asserts that all game invariants hold (debug builds only).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        GameInvariants::check_all(state).is_ok(),
        "game invariant violated"
    );
}
