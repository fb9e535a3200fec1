//! Leftward compaction and merging.
//!
//! Each row is handled on its own in a single left-to-right pass. A tile
//! produced by a merge is never merged again in the same pass, so
//! `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and `[2, 2, 2, 0]` becomes
//! `[4, 2, 0, 0]`.
//!
//! Two tiles at [`MAX_TILE`] stay side by side: their sum has no `Tile`
//! representation.

use crate::board::{Board, MAX_TILE, Row, SIZE, Tile};
use tracing::instrument;

/// Compacts and merges one row toward index 0.
#[instrument]
pub fn collapse_row(row: Row) -> Row {
    let mut out: Row = [0; SIZE];
    let mut len = 0;
    // Value of the last tile appended; 0 after a merge blocks chaining.
    let mut last: Tile = 0;

    for tile in row.into_iter().filter(|&t| t != 0) {
        if tile == last
            && let Some(merged) = tile.checked_mul(2)
        {
            out[len - 1] = merged;
            last = 0;
        } else {
            out[len] = tile;
            len += 1;
            last = tile;
        }
    }
    out
}

/// Collapses every row of `board` to the left.
#[instrument(skip(board))]
pub fn collapse(board: &Board) -> Board {
    let mut rows = *board.rows();
    for row in rows.iter_mut() {
        *row = collapse_row(*row);
    }
    Board::from_rows(rows)
}
