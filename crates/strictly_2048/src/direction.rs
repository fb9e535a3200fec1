//! Move directions.

use tracing::instrument;

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum Direction {
    /// Toward the top row.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward the first column.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns that bring this direction's edge to the left.
    ///
    /// Collapsing left after rotating by this count, then rotating back,
    /// is the same as collapsing toward `self`.
    #[instrument]
    pub fn quarter_turns(self) -> i32 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}
