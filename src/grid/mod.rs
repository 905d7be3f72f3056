//! Grid data model: bounds-checked storage of cell states
//!
//! The grid is a pure data container. Neighborhood queries, population
//! generation, and the empty-site registry live in submodules.

pub mod neighborhood;
pub mod populate;
pub mod registry;

pub use neighborhood::neighbors;
pub use populate::{populate, population_counts};
pub use registry::EmptySiteRegistry;

use crate::core::error::{Result, SimError};
use crate::core::types::{CellState, Coord};

/// Square N x N grid of cell states, row-major storage
///
/// N is fixed for the lifetime of the grid; resizing means constructing a
/// new one. The lattice is bounded: nothing wraps at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

/// Per-color cell tallies for a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCounts {
    pub red: usize,
    pub blue: usize,
    pub empty: usize,
}

impl CellCounts {
    pub fn total(&self) -> usize {
        self.red + self.blue + self.empty
    }
}

impl Grid {
    /// Create a grid with every cell in the same state
    pub fn filled(size: usize, state: CellState) -> Self {
        Self {
            size,
            cells: vec![state; size * size],
        }
    }

    /// Create a grid from an explicit row-major assignment of states
    pub fn from_cells(size: usize, cells: Vec<CellState>) -> Result<Self> {
        if cells.len() != size * size {
            return Err(SimError::InvalidConfiguration(format!(
                "expected {} cells for a {}x{} grid, got {}",
                size * size,
                size,
                size,
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all cell states
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State at (row, col), `OutOfBounds` outside [0, N)
    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Overwrite the state at (row, col), `OutOfBounds` outside [0, N)
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = state;
        Ok(())
    }

    /// Count cells of each state
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts {
            red: 0,
            blue: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                CellState::Red => counts.red += 1,
                CellState::Blue => counts.blue += 1,
                CellState::Empty => counts.empty += 1,
            }
        }
        counts
    }

    /// All coordinates in row-major order
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(SimError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    /// State at a coordinate known to be in range
    pub(crate) fn state_at(&self, coord: Coord) -> CellState {
        self.cells[coord.row * self.size + coord.col]
    }

    /// Overwrite a coordinate known to be in range
    pub(crate) fn put(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.row * self.size + coord.col] = state;
    }
}
