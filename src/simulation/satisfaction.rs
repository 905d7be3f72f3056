//! Neighborhood satisfaction rule
//!
//! Ratios are taken over the full neighbor count rather than raw counts so
//! edge and corner cells, which have fewer neighbors, are judged on the same
//! scale as interior cells.

use crate::core::types::{CellState, Coord};
use crate::grid::neighborhood::neighbor_states;
use crate::grid::Grid;

/// Evaluate whether an occupied cell is satisfied with its neighborhood
///
/// `similar / total >= similarity_threshold` and
/// `occupied / total >= occupancy_threshold` must both hold. A cell with no
/// neighbors at all (1x1 grid) is satisfied by definition: there is no one
/// to disagree with. Thresholds are fractions in [0, 1]; callers holding
/// integer percentages must divide by 100 first.
pub fn is_satisfied(
    color: CellState,
    neighbor_states: &[CellState],
    similarity_threshold: f64,
    occupancy_threshold: f64,
) -> bool {
    debug_assert!(color.is_occupied(), "empty cells are never evaluated");

    let total = neighbor_states.len();
    if total == 0 {
        return true;
    }

    let occupied = neighbor_states.iter().filter(|s| s.is_occupied()).count();
    let similar = neighbor_states.iter().filter(|&&s| s == color).count();

    let total = total as f64;
    similar as f64 / total >= similarity_threshold
        && occupied as f64 / total >= occupancy_threshold
}

/// Satisfaction of the occupied cell at a validated coordinate
pub(crate) fn satisfied_at(
    grid: &Grid,
    coord: Coord,
    radius: usize,
    similarity_threshold: f64,
    occupancy_threshold: f64,
) -> bool {
    let color = grid.state_at(coord);
    let states = neighbor_states(grid, coord, radius);
    is_satisfied(color, &states, similarity_threshold, occupancy_threshold)
}
