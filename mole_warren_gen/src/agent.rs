// The digger agent.
//
// A digger is ephemeral: it exists only inside one carve run, created by a
// spawn strategy and destroyed by population shrink. Each iteration its
// cell is carved open and it random-walks one step through the grid
// interior. Its position is always within grid bounds.
//
// See also: `spawn.rs` for where diggers appear, `carve.rs` for the loop
// that moves them and manages the population.

use crate::types::{CellCoord, Direction};
use serde::{Deserialize, Serialize};

/// A mobile carving agent: current position + movement heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digger {
    pub position: CellCoord,
    pub heading: Direction,
}

impl Digger {
    pub const fn new(position: CellCoord, heading: Direction) -> Self {
        Self { position, heading }
    }
}
