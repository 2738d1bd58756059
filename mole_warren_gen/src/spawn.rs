// Spawn strategies for new diggers.
//
// Three policies: Center (grid midpoint), RandomCorner (round-robin through
// the four grid quadrants, uniform cell within each), AtParent (the
// position of the digger whose scan triggered the addition, falling back
// to Center when no parent exists). The corner cursor is the only piece of
// state; everything else is pure computation over the config dimensions
// and the PRNG.
//
// The quadrant boxes tile the whole grid: the split points are
// `ceil(width / 2)` and `ceil(height / 2)`, so on odd dimensions the low
// halves are one cell larger. Spawn positions may land on the grid edge;
// only movement is interior-constrained.
//
// See also: `carve.rs` which calls `spawn_digger` during setup and
// population growth, `types.rs` for `SpawnMode`.
//
// **Critical constraint: determinism.** Draw order is fixed: position x,
// then position y, then heading. Reordering draws changes every grid
// downstream of a seed.

use crate::agent::Digger;
use crate::config::GeneratorConfig;
use crate::prng::WarrenRng;
use crate::types::{CellCoord, Direction, SpawnMode};
use serde::{Deserialize, Serialize};

/// The four grid quadrants as `(qx, qy)` flags, in cycle order.
const QUADRANTS: [(u32, u32); 4] = [(0, 0), (0, 1), (1, 1), (1, 0)];

/// Round-robin cursor over the four quadrants for
/// `SpawnMode::RandomCorner`. Reset at the start of every run.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CornerCycle {
    cursor: usize,
}

impl CornerCycle {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Return the current quadrant and advance the cursor, wrapping after
    /// the fourth.
    fn next(&mut self) -> (u32, u32) {
        let quadrant = QUADRANTS[self.cursor];
        self.cursor = (self.cursor + 1) % QUADRANTS.len();
        quadrant
    }
}

/// Half-open bounding box of a quadrant: `(x_min, x_max, y_min, y_max)`.
fn quadrant_box(quadrant: (u32, u32), width: u32, height: u32) -> (i32, i32, i32, i32) {
    let split_x = width.div_ceil(2);
    let split_y = height.div_ceil(2);
    let (x_min, x_max) = if quadrant.0 == 0 {
        (0, split_x)
    } else {
        (split_x, width)
    };
    let (y_min, y_max) = if quadrant.1 == 0 {
        (0, split_y)
    } else {
        (split_y, height)
    };
    (x_min as i32, x_max as i32, y_min as i32, y_max as i32)
}

/// Spawn at the grid center with a random heading.
pub fn spawn_center(config: &GeneratorConfig, rng: &mut WarrenRng) -> Digger {
    let position = CellCoord::new((config.width / 2) as i32, (config.height / 2) as i32);
    Digger::new(position, Direction::random(rng))
}

/// Spawn at a uniformly random cell inside the cycle's next quadrant.
pub fn spawn_in_corner(
    config: &GeneratorConfig,
    cycle: &mut CornerCycle,
    rng: &mut WarrenRng,
) -> Digger {
    let (x_min, x_max, y_min, y_max) = quadrant_box(cycle.next(), config.width, config.height);
    let x = rng.range_i32(x_min, x_max);
    let y = rng.range_i32(y_min, y_max);
    Digger::new(CellCoord::new(x, y), Direction::random(rng))
}

/// Spawn at the parent digger's position with a fresh heading, or at the
/// center when no parent exists.
pub fn spawn_at_parent(
    config: &GeneratorConfig,
    parent: Option<&Digger>,
    rng: &mut WarrenRng,
) -> Digger {
    match parent {
        Some(parent) => Digger::new(parent.position, Direction::random(rng)),
        None => spawn_center(config, rng),
    }
}

/// Spawn a digger according to the configured mode.
pub fn spawn_digger(
    config: &GeneratorConfig,
    parent: Option<&Digger>,
    cycle: &mut CornerCycle,
    rng: &mut WarrenRng,
) -> Digger {
    match config.spawn_mode {
        SpawnMode::RandomCorner => spawn_in_corner(config, cycle, rng),
        SpawnMode::AtParent => spawn_at_parent(config, parent, rng),
        SpawnMode::Center => spawn_center(config, rng),
    }
}
