// The carve loop.
//
// A population of diggers random-walks across the grid, carving its cells
// open, until the open-cell ratio reaches the configured target. Each
// iteration runs four phases in fixed order: carve, move + retarget,
// population shrink, population growth. The population is bounded to
// [1, max_diggers] throughout; at most one digger is removed and one added
// per iteration.
//
// The loop gives up after `MAX_ITERATIONS` so unreachable targets still
// terminate; the partial grid is a valid result, not an error.
//
// See also: `grid.rs` for the grid being carved, `spawn.rs` for where new
// diggers appear, `postprocess.rs` for the cleanup passes the generator
// applies afterward, `generator.rs` which calls `carve_warren()`.
//
// **Critical constraint: determinism.** All randomness comes from the
// `WarrenRng` passed by the caller, and the draw order below is fixed:
// one chance roll per digger in the move phase (consumed whether or not
// the digger moved), one roll per scanned digger in each population phase
// (consumed even when the phase cannot fire). Reordering or skipping
// draws changes every grid downstream of a seed.

use crate::agent::Digger;
use crate::config::GeneratorConfig;
use crate::grid::CellGrid;
use crate::prng::WarrenRng;
use crate::spawn::{self, CornerCycle};
use crate::types::{CellCoord, CellState, Direction};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Hard bound on carve iterations. Reaching it is not an error; the grid
/// carved so far is returned with `reached_target = false`.
pub const MAX_ITERATIONS: u32 = 1_000_000;

/// Statistics from one carve run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarveReport {
    /// Loop bodies executed. At least 1, at most `MAX_ITERATIONS`.
    pub iterations: u32,
    /// Open cells when the loop stopped, before any post-processing.
    pub open_cells: u32,
    /// `open_cells` over the total cell count when the loop stopped.
    pub open_ratio: f32,
    /// Whether the loop stopped because the target ratio was reached
    /// (as opposed to hitting the iteration cap).
    pub reached_target: bool,
    /// Diggers added by population growth.
    pub diggers_spawned: u32,
    /// Diggers removed by population shrink.
    pub diggers_removed: u32,
    /// Population size when the loop stopped.
    pub diggers_final: u32,
}

/// Carve open space into `grid` until the target open ratio is reached.
///
/// Seeds the run with a single digger at the grid center (one heading
/// draw), then iterates the four phases. The corner cursor for
/// `SpawnMode::RandomCorner` starts at the first quadrant on every run.
pub fn carve_warren(
    grid: &mut CellGrid,
    config: &GeneratorConfig,
    rng: &mut WarrenRng,
) -> CarveReport {
    let width = config.width as i32;
    let height = config.height as i32;
    let total_cells = (config.width * config.height) as f32;

    // --- Setup ---
    let mut cycle = CornerCycle::new();
    let mut diggers: SmallVec<[Digger; 8]> = smallvec![spawn::spawn_center(config, rng)];
    let mut open_cells: u32 = 0;
    let mut diggers_spawned: u32 = 0;
    let mut diggers_removed: u32 = 0;
    let mut iterations: u32 = 0;

    loop {
        // --- Carve ---
        // Only Filled cells bump the counter; shared or revisited cells
        // are not double counted.
        for digger in diggers.iter() {
            if grid.get(digger.position) == CellState::Filled {
                grid.set(digger.position, CellState::Open);
                open_cells += 1;
            }
        }

        // --- Move + retarget ---
        // The candidate must be strictly interior or the digger holds its
        // position this tick. The chance roll is consumed either way.
        for digger in diggers.iter_mut() {
            let candidate = digger.position.step(digger.heading);
            if is_interior(candidate, width, height) {
                digger.position = candidate;
            }
            if rng.next_f32() < config.change_direction_chance {
                digger.heading = Direction::random(rng);
            }
        }

        // --- Population shrink ---
        // One roll per scanned digger. A hit with a single digger left
        // neither removes nor ends the scan.
        for i in 0..diggers.len() {
            if rng.next_f32() > config.remove_digger_chance || diggers.len() <= 1 {
                continue;
            }
            diggers.remove(i);
            diggers_removed += 1;
            break;
        }

        // --- Population growth ---
        // One roll per scanned digger, consumed even when the population
        // is already at the cap. The scanned digger becomes the parent.
        for i in 0..diggers.len() {
            if rng.next_f32() > config.add_digger_chance
                || diggers.len() >= config.max_diggers as usize
            {
                continue;
            }
            let parent = diggers[i];
            let child = spawn::spawn_digger(config, Some(&parent), &mut cycle, rng);
            diggers.push(child);
            diggers_spawned += 1;
            break;
        }

        // --- Termination check ---
        iterations += 1;
        let open_ratio = open_cells as f32 / total_cells;
        let reached_target = open_ratio >= config.target_open_ratio;
        if reached_target || iterations >= MAX_ITERATIONS {
            return CarveReport {
                iterations,
                open_cells,
                open_ratio,
                reached_target,
                diggers_spawned,
                diggers_removed,
                diggers_final: diggers.len() as u32,
            };
        }
    }
}

/// Strict interior test: both coordinates in the open interval
/// `(0, dim - 1)`. Border cells fail.
fn is_interior(coord: CellCoord, width: i32, height: i32) -> bool {
    coord.x > 0 && coord.x < width - 1 && coord.y > 0 && coord.y < height - 1
}
