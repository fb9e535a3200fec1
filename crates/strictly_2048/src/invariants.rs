//! Board properties checked around every move and spawn.
//!
//! Each property is a zero-sized type implementing [`Invariant`]. Tuples of
//! them form an [`InvariantSet`], which the contracts run in debug builds.

use crate::board::{Board, Tile};
use tracing::warn;

/// A property of a state that must always hold.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property guarantees, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation report.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    fn of<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self::new(I::description()))
    }
}

/// Several invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Runs every member and returns all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> =
                    [$(InvariantViolation::of::<S, $member>(state)),+]
                        .into_iter()
                        .flatten()
                        .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// A board before and after one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Board the operation started from.
    pub before: Board,
    /// Board the operation produced.
    pub after: Board,
}

impl Transition {
    /// Creates a new transition.
    pub fn new(before: Board, after: Board) -> Self {
        Self { before, after }
    }
}

fn is_valid_tile(tile: Tile) -> bool {
    tile == 0 || tile.is_power_of_two()
}

/// Invariant: every cell is empty or a power of two.
pub struct PowerOfTwoTiles;

impl Invariant<Board> for PowerOfTwoTiles {
    fn holds(board: &Board) -> bool {
        board.cells().all(|(_, tile)| is_valid_tile(tile))
    }

    fn description() -> &'static str {
        "Every tile is empty or a power of two"
    }
}

impl Invariant<Transition> for PowerOfTwoTiles {
    fn holds(transition: &Transition) -> bool {
        <Self as Invariant<Board>>::holds(&transition.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: sliding and merging never create or destroy value.
pub struct TileSumConserved;

impl Invariant<Transition> for TileSumConserved {
    fn holds(transition: &Transition) -> bool {
        let valid = transition.before.tile_sum() == transition.after.tile_sum();
        if !valid {
            warn!(
                before = transition.before.tile_sum(),
                after = transition.after.tile_sum(),
                "Tile sum changed"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Total tile value is conserved"
    }
}

/// Invariant: a move never adds tiles.
pub struct TileCountNonIncreasing;

impl Invariant<Transition> for TileCountNonIncreasing {
    fn holds(transition: &Transition) -> bool {
        transition.after.tile_count() <= transition.before.tile_count()
    }

    fn description() -> &'static str {
        "Non-empty cell count does not increase"
    }
}

/// Invariant: exactly one empty cell became a 2 or a 4, nothing else changed.
pub struct SingleTileSpawned;

impl Invariant<Transition> for SingleTileSpawned {
    fn holds(transition: &Transition) -> bool {
        let changed: Vec<(Tile, Tile)> = transition
            .before
            .cells()
            .zip(transition.after.cells())
            .map(|((_, before), (_, after))| (before, after))
            .filter(|(before, after)| before != after)
            .collect();

        let valid = matches!(changed.as_slice(), [(0, 2)] | [(0, 4)]);
        if !valid {
            warn!(changed = changed.len(), "Spawn changed unexpected cells");
        }
        valid
    }

    fn description() -> &'static str {
        "Exactly one empty cell received a 2 or a 4"
    }
}

/// Invariants every legal move must keep.
pub type MoveInvariants = (PowerOfTwoTiles, TileSumConserved, TileCountNonIncreasing);

/// Invariants every spawn must keep.
pub type SpawnInvariants = (PowerOfTwoTiles, SingleTileSpawned);
