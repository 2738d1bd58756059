// Cleanup passes over the carved grid.
//
// Two passes, applied in fixed order after the carve loop stops:
// isolated-wall removal first (optional), border enforcement second
// (optional). Border enforcement runs last, so the border cannot be eroded
// by the isolate pass.
//
// The isolate scan covers x in [0, width - 1) and y in [0, height - 1):
// the final row and column are never re-examined, a preserved asymmetry of
// the scan. The scan mutates in place, so earlier conversions are visible
// to later neighborhood checks.
//
// See also: `carve.rs` for the loop that produces the grid, `generator.rs`
// which applies these passes through `apply()`.

use crate::config::GeneratorConfig;
use crate::grid::CellGrid;
use crate::types::{CellCoord, CellState};

/// Apply the configured cleanup passes, isolate removal before border
/// enforcement.
pub fn apply(grid: &mut CellGrid, config: &GeneratorConfig) {
    if config.remove_isolated_walls {
        remove_isolated_walls(grid);
    }
    if config.add_border {
        add_border(grid);
    }
}

/// Open every scanned Filled cell whose in-bounds Moore neighborhood is
/// entirely Open.
///
/// Scans x in [0, width - 1), y in [0, height - 1), x-major.
pub fn remove_isolated_walls(grid: &mut CellGrid) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    for x in 0..width - 1 {
        for y in 0..height - 1 {
            let cell = CellCoord::new(x, y);
            if grid.get(cell) != CellState::Filled {
                continue;
            }
            if !has_filled_neighbor(grid, cell) {
                grid.set(cell, CellState::Open);
            }
        }
    }
}

/// True if any in-bounds Moore neighbor of `cell` is Filled.
///
/// The clip is explicit: out-of-bounds reads return Filled and must not
/// count as neighbors here.
fn has_filled_neighbor(grid: &CellGrid, cell: CellCoord) -> bool {
    let x_lo = (cell.x - 1).max(0);
    let x_hi = (cell.x + 1).min(grid.width() as i32 - 1);
    let y_lo = (cell.y - 1).max(0);
    let y_hi = (cell.y + 1).min(grid.height() as i32 - 1);
    for nx in x_lo..=x_hi {
        for ny in y_lo..=y_hi {
            if nx == cell.x && ny == cell.y {
                continue;
            }
            if grid.get(CellCoord::new(nx, ny)) == CellState::Filled {
                return true;
            }
        }
    }
    false
}

/// Fill every cell on the outermost rows and columns.
pub fn add_border(grid: &mut CellGrid) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    for x in 0..width {
        grid.set(CellCoord::new(x, 0), CellState::Filled);
        grid.set(CellCoord::new(x, height - 1), CellState::Filled);
    }
    for y in 0..height {
        grid.set(CellCoord::new(0, y), CellState::Filled);
        grid.set(CellCoord::new(width - 1, y), CellState::Filled);
    }
}
