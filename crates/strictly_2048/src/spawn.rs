//! Random tile placement.

use crate::board::{Board, Tile};
#[cfg(debug_assertions)]
use crate::contracts::{Contract, Placement, SpawnContract};
use crate::error::SpawnError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Draws the value of a new tile: 2 (90%) or 4 (10%).
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(TWO_PROBABILITY) { 2 } else { 4 }
}

/// Places one new tile in a uniformly chosen empty cell.
///
/// Returns [`SpawnError::BoardFull`] when there is nowhere to put it. The
/// random source is injected, so a seeded RNG replays the same sequence:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use strictly_2048::{Board, spawn};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let board = spawn(&Board::EMPTY, &mut rng).unwrap();
/// assert_eq!(board.tile_count(), 1);
/// ```
#[instrument(skip(board, rng))]
pub fn spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Board, SpawnError> {
    let empty = board.empty_cells();
    let Some(&cell) = empty.choose(rng) else {
        debug!("No empty cell to spawn into");
        return Err(SpawnError::BoardFull);
    };
    let tile = random_tile(rng);

    #[cfg(debug_assertions)]
    SpawnContract::pre(board, &Placement { cell, tile })?;

    let spawned = board.with_tile(cell, tile);

    #[cfg(debug_assertions)]
    SpawnContract::post(board, &spawned)?;

    debug!(%cell, tile, "Tile spawned");
    Ok(spawned)
}
