//! Quarter-turn rotation of a board.
//!
//! Rotation lets a single left-collapse serve all four directions, so the
//! closure laws below are what the move engine relies on:
//!
//! - `rotate(b, 0) == b`
//! - `rotate(rotate(b, k1), k2) == rotate(b, k1 + k2)`
//! - `rotate(rotate(b, k), -k) == b`

use crate::board::{Board, Row, SIZE};
use tracing::instrument;

/// Rotates `board` clockwise by `quarter_turns` × 90°.
///
/// Any integer is accepted and taken modulo 4, so `-1` is one
/// counter-clockwise turn. The result is built with one index remapping
/// regardless of the turn count.
#[instrument(skip(board))]
pub fn rotate(board: &Board, quarter_turns: i32) -> Board {
    let turns = quarter_turns.rem_euclid(4);
    if turns == 0 {
        return *board;
    }

    let src = board.rows();
    let last = SIZE - 1;
    let mut rows: [Row; SIZE] = [[0; SIZE]; SIZE];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, tile) in row.iter_mut().enumerate() {
            *tile = match turns {
                1 => src[last - c][r],
                2 => src[last - r][last - c],
                _ => src[c][last - r],
            };
        }
    }
    Board::from_rows(rows)
}
