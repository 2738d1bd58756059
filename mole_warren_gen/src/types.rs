// Core types shared across the generator.
//
// Defines cell states, grid coordinates (`CellCoord`), digger headings
// (`Direction`), and spawn modes. All types derive `Serialize` and
// `Deserialize` so configs and cached runs can be saved and restored.
//
// **Critical constraint: determinism.** Heading draws go through the seeded
// `WarrenRng` (see the `prng` re-export in lib.rs). Do not introduce any
// other source of randomness.

use crate::prng::WarrenRng;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Cell states
// ---------------------------------------------------------------------------

/// The state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Solid rock. Every cell starts out Filled.
    Filled,
    /// Carved, traversable space.
    Open,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Filled
    }
}

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 2D cell grid, in cell units.
///
/// X grows rightward across columns, Y grows upward across rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one cell away in the given direction.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Digger headings
// ---------------------------------------------------------------------------

/// A cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in draw order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction as `(dx, dy)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Draw a uniformly random direction, consuming exactly one integer
    /// draw. The result may equal any current heading; redraws do not
    /// exclude the value they replace.
    pub fn random(rng: &mut WarrenRng) -> Self {
        Self::ALL[rng.range_usize(0, Self::ALL.len())]
    }
}

// ---------------------------------------------------------------------------
// Spawn modes
// ---------------------------------------------------------------------------

/// Policy governing where newly added diggers appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnMode {
    /// Cycle through the four grid quadrants, spawning at a uniformly
    /// random cell inside each in turn.
    RandomCorner,
    /// Spawn at the position of the digger whose scan triggered the
    /// addition.
    AtParent,
    /// Spawn at the grid center.
    Center,
}
