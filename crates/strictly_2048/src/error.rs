//! Error types for board transitions.
//!
//! These are expected control-flow outcomes, not failures: a rejected move
//! sends the player back to the prompt and a full board ends the game.

use crate::direction::Direction;

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Moving in this direction would leave the board unchanged.
    #[display("Invalid move: nothing slides or merges {}", _0)]
    NoOpMove(Direction),

    /// The session has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A move postcondition failed (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error returned when a tile cannot be spawned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SpawnError {
    /// No empty cell is left for a new tile.
    #[display("Board is full")]
    BoardFull,

    /// A spawn postcondition failed (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SpawnError {}
