//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// Agents are fungible within a color; a cell has no identity beyond its
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Red,
    Blue,
    Empty,
}

impl CellState {
    /// Returns true for cells holding an agent of either color
    pub fn is_occupied(&self) -> bool {
        !matches!(self, CellState::Empty)
    }

    /// Single-character representation for terminal rendering
    pub fn glyph(&self) -> char {
        match self {
            CellState::Red => 'R',
            CellState::Blue => 'B',
            CellState::Empty => '.',
        }
    }
}

/// Round counter (simulation time unit, one full pass over the grid)
pub type Round = u64;

/// Grid coordinate as (row, col)
///
/// The derived `Ord` compares row first, then column, so sorting a list of
/// coordinates yields row-major order. Relocation tie-breaking relies on
/// this.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    pub fn manhattan(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}
