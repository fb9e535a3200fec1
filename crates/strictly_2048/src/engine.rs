//! Directional moves and legality rules.
//!
//! Every direction is realized by rotating the target edge to the left,
//! collapsing left, and rotating back.

use crate::board::Board;
use crate::collapse::collapse;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::direction::Direction;
use crate::error::MoveError;
use crate::rotate::rotate;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Returns the board after sliding and merging toward `direction`.
///
/// No legality check and no randomness: the result equals `board` when
/// nothing can move.
#[instrument(skip(board))]
pub fn shift(board: &Board, direction: Direction) -> Board {
    let turns = direction.quarter_turns();
    rotate(&collapse(&rotate(board, turns)), -turns)
}

/// Applies a move, rejecting it when the board would not change.
///
/// Returns the committed board for a legal move, or
/// [`MoveError::NoOpMove`] when no tile can slide or merge toward
/// `direction`. Pure: the same board and direction always give the same
/// answer.
#[instrument(skip(board))]
pub fn try_move(board: &Board, direction: Direction) -> Result<Board, MoveError> {
    #[cfg(debug_assertions)]
    MoveContract::pre(board, &direction)?;

    let candidate = shift(board, direction);
    if candidate == *board {
        debug!(%direction, "Move leaves board unchanged");
        return Err(MoveError::NoOpMove(direction));
    }

    #[cfg(debug_assertions)]
    MoveContract::post(board, &candidate)?;

    debug!(
        %direction,
        merges = board.tile_count().saturating_sub(candidate.tile_count()),
        "Move applied"
    );
    Ok(candidate)
}

/// Checks whether moving toward `direction` would change the board.
#[instrument(skip(board))]
pub fn is_legal(board: &Board, direction: Direction) -> bool {
    shift(board, direction) != *board
}

/// Lists the directions that would change the board.
#[instrument(skip(board))]
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::iter().filter(|&d| is_legal(board, d)).collect()
}

/// Checks whether any direction would change the board.
#[instrument(skip(board))]
pub fn has_legal_move(board: &Board) -> bool {
    Direction::iter().any(|d| is_legal(board, d))
}

/// True if no move in any direction changes the board.
///
/// An empty board is stuck as well: nothing can slide until a tile spawns.
pub fn is_stuck(board: &Board) -> bool {
    !has_legal_move(board)
}
