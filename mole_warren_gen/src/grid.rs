// Dense 2D cell grid.
//
// The grid is stored as a flat `Vec<CellState>` indexed by `x + y * width`,
// giving O(1) read/write access. Out-of-bounds reads return `Filled` (the
// world beyond the edge is solid rock); out-of-bounds writes are no-ops.
// Dimensions are fixed at construction and never change.
//
// The carve loop and the post-process passes only address in-bounds
// coordinates by construction of the movement and border rules, so the
// out-of-bounds conventions exist for external callers probing past the
// edge. The isolate pass in `postprocess.rs` clips its neighborhood
// explicitly instead of relying on the Filled default.
//
// See also: `carve.rs` which populates the grid, `postprocess.rs` for the
// cleanup passes over the finished grid, `generator.rs` which owns the grid
// as part of `WarrenGenerator`.

use crate::types::{CellCoord, CellState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense 2D grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    /// Flat storage: index = x + y * width.
    cells: Vec<CellState>,
    width: u32,
    height: u32,
}

impl CellGrid {
    /// Create a new grid with every cell `Filled`.
    pub fn new(width: u32, height: u32) -> Self {
        let total = (width as usize) * (height as usize);
        Self {
            cells: vec![CellState::Filled; total],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, coord: CellCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.x as usize + coord.y as usize * self.width as usize)
        } else {
            None
        }
    }

    /// Read a cell. Returns `Filled` for out-of-bounds coordinates.
    pub fn get(&self, coord: CellCoord) -> CellState {
        self.index(coord)
            .map(|i| self.cells[i])
            .unwrap_or(CellState::Filled)
    }

    /// Write a cell. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: CellCoord, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }

    /// Count of `Open` cells.
    pub fn open_cells(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| **cell == CellState::Open)
            .count() as u32
    }
}

impl fmt::Display for CellGrid {
    /// Render the grid as text: `#` for Filled, `.` for Open, one row per
    /// line, top row (y = height - 1) first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let ch = match self.get(CellCoord::new(x, y)) {
                    CellState::Filled => '#',
                    CellState::Open => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
