//! Core grid type for 2048.

use tracing::instrument;

/// Side length of the square grid.
pub const SIZE: usize = 4;

/// Value held by a cell. `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// Largest tile a board can hold.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// One row of the grid, left to right.
pub type Row = [Tile; SIZE];

/// Coordinates of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable snapshot of a `SIZE`×`SIZE` 2048 grid.
///
/// Boards are plain values: every transformation returns a new board.
/// Construction checks shape only; tile values are kept well-formed by the
/// operations that produce boards (collapse and spawn), and the contracts
/// in [`crate::contracts`] verify that in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: [Row; SIZE],
}

impl Board {
    /// A board with no tiles.
    pub const EMPTY: Board = Board {
        rows: [[0; SIZE]; SIZE],
    };

    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a board from rows listed top to bottom.
    pub fn from_rows(rows: [Row; SIZE]) -> Self {
        Self { rows }
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[Row; SIZE] {
        &self.rows
    }

    /// Gets the tile at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the tile at the given cell.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.get(cell.row, cell.col)
    }

    /// Checks if a cell is empty. Out-of-range cells are never empty.
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(0)
    }

    /// Iterates over every cell with its tile, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Cell::new(row, col), tile))
        })
    }

    /// Lists the empty cells in row-major order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&(_, tile)| tile == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Checks whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, tile)| tile != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells().filter(|&(_, tile)| tile != 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells().map(|(_, tile)| u64::from(tile)).sum()
    }

    /// Highest tile on the board, `0` for an empty board.
    pub fn highest_tile(&self) -> Tile {
        self.cells().map(|(_, tile)| tile).max().unwrap_or(0)
    }

    /// Non-empty tile values in ascending order.
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self
            .cells()
            .map(|(_, tile)| tile)
            .filter(|&tile| tile != 0)
            .collect();
        tiles.sort_unstable();
        tiles
    }

    /// Returns a copy of this board with `cell` set to `tile`.
    ///
    /// Only the spawner places tiles, so this stays crate-private.
    pub(crate) fn with_tile(mut self, cell: Cell, tile: Tile) -> Self {
        self.rows[cell.row][cell.col] = tile;
        self
    }
}

impl From<[Row; SIZE]> for Board {
    fn from(rows: [Row; SIZE]) -> Self {
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            let line = row
                .iter()
                .map(|&tile| match tile {
                    0 => format!("{:>5}", "."),
                    t => format!("{:>5}", t),
                })
                .collect::<String>();
            write!(f, "{}", line)?;
            if idx + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
