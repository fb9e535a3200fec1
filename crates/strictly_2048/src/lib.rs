//! Strictly 2048 - pure board transition engine for the 2048 puzzle
//!
//! Tiles hold powers of two on a 4×4 grid. Every move slides and merges
//! tiles toward one edge, and a new tile spawns after each legal move.
//!
//! # Architecture
//!
//! - **Board**: immutable grid snapshot ([`Board`])
//! - **Rotator**: quarter-turn rotation ([`rotate`])
//! - **Collapser**: single-pass leftward merge ([`collapse`])
//! - **Engine**: all four directions via rotate, collapse, rotate back
//!   ([`try_move`]), plus legality queries
//! - **Spawner**: seeded or thread RNG tile placement ([`spawn`])
//! - **Session**: the turn loop, driven through [`Input`] and [`Renderer`]
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Board, Direction, MoveError, try_move};
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//!
//! let left = try_move(&board, Direction::Left).unwrap();
//! assert_eq!(left.rows()[0], [4, 0, 0, 0]);
//!
//! assert_eq!(
//!     try_move(&board, Direction::Up),
//!     Err(MoveError::NoOpMove(Direction::Up))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod collaborator;
mod collapse;
pub mod contracts;
mod direction;
mod engine;
mod error;
pub mod invariants;
mod rotate;
mod session;
mod spawn;

// Crate-level exports - Board
pub use board::{Board, Cell, MAX_TILE, Row, SIZE, Tile};
pub use direction::Direction;

// Crate-level exports - Transformations
pub use collapse::{collapse, collapse_row};
pub use rotate::rotate;

// Crate-level exports - Rules
pub use engine::{has_legal_move, is_legal, is_stuck, legal_directions, shift, try_move};
pub use spawn::{TWO_PROBABILITY, random_tile, spawn};

// Crate-level exports - Errors
pub use error::{MoveError, SpawnError};

// Crate-level exports - Session
pub use collaborator::{Input, InputEvent, Renderer, Status};
pub use session::{GameSession, SessionError, SessionOutcome, SessionState};
