//! Registry of empty sites
//!
//! Rebuilt by full scan at the start of each round, then kept consistent
//! with the grid as relocations commit. Sites are stored sorted in row-major
//! order; relocation tie-breaking depends on that invariant.

use crate::core::types::{CellState, Coord};
use crate::grid::Grid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptySiteRegistry {
    sites: Vec<Coord>,
}

impl EmptySiteRegistry {
    /// Build the registry from a full grid scan
    ///
    /// Scanning row-major leaves the sites sorted.
    pub fn scan(grid: &Grid) -> Self {
        let sites = grid
            .iter_coords()
            .filter(|&coord| grid.state_at(coord) == CellState::Empty)
            .collect();
        Self { sites }
    }

    /// Registered sites in row-major order
    pub fn sites(&self) -> &[Coord] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.sites.binary_search(&coord).is_ok()
    }

    /// Remove a site that just became occupied
    pub fn occupy(&mut self, coord: Coord) {
        if let Ok(idx) = self.sites.binary_search(&coord) {
            self.sites.remove(idx);
        }
    }

    /// Register a site that just became empty, preserving sort order
    pub fn vacate(&mut self, coord: Coord) {
        if let Err(idx) = self.sites.binary_search(&coord) {
            self.sites.insert(idx, coord);
        }
    }
}
