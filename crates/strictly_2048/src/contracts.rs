//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning `{P} action {Q}`.

use crate::board::{Board, Cell, Tile};
use crate::direction::Direction;
use crate::error::{MoveError, SpawnError};
use crate::invariants::{
    Invariant, InvariantSet, InvariantViolation, MoveInvariants, PowerOfTwoTiles,
    SpawnInvariants, Transition,
};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error produced when a condition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for directional moves.
///
/// Preconditions:
/// - Every tile is empty or a power of two
///
/// Postconditions:
/// - Tiles are still powers of two
/// - Total tile value is conserved
/// - No tiles were added
pub struct MoveContract;

impl Contract<Board, Direction> for MoveContract {
    type Error = MoveError;

    fn pre(board: &Board, _direction: &Direction) -> Result<(), MoveError> {
        if <PowerOfTwoTiles as Invariant<Board>>::holds(board) {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Precondition failed: {}",
                <PowerOfTwoTiles as Invariant<Board>>::description()
            )))
        }
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        MoveInvariants::check_all(&Transition::new(*before, *after)).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe(&violations)
            ))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Spawn Contract
// ─────────────────────────────────────────────────────────────

/// A tile about to be placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Target cell.
    pub cell: Cell,
    /// Value being placed.
    pub tile: Tile,
}

/// Contract for spawning a tile.
///
/// Preconditions:
/// - The target cell is empty
/// - The tile is a 2 or a 4
///
/// Postconditions:
/// - Exactly one empty cell received a 2 or a 4
pub struct SpawnContract;

impl Contract<Board, Placement> for SpawnContract {
    type Error = SpawnError;

    #[instrument(skip(board))]
    fn pre(board: &Board, placement: &Placement) -> Result<(), SpawnError> {
        if !board.is_empty_cell(placement.cell) {
            return Err(SpawnError::InvariantViolation(format!(
                "Precondition failed: cell {} is not empty",
                placement.cell
            )));
        }
        if !matches!(placement.tile, 2 | 4) {
            return Err(SpawnError::InvariantViolation(format!(
                "Precondition failed: cannot spawn a {}",
                placement.tile
            )));
        }
        Ok(())
    }

    fn post(before: &Board, after: &Board) -> Result<(), SpawnError> {
        SpawnInvariants::check_all(&Transition::new(*before, *after)).map_err(|violations| {
            SpawnError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe(&violations)
            ))
        })
    }
}
