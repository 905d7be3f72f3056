//! Relocation of unsatisfied agents to empty sites
//!
//! The canonical policy moves an agent to the nearest empty site where it
//! would itself be satisfied, trying candidates in ascending Manhattan
//! distance. A simpler first-available variant is kept as a named
//! alternative; a run uses one policy for all agents.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{CellState, Coord};
use crate::grid::{EmptySiteRegistry, Grid};
use crate::simulation::satisfaction::satisfied_at;

/// Destination selection strategy for unsatisfied agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationPolicy {
    /// Nearest empty site (Manhattan distance, row-major tie-break) where
    /// the agent would be satisfied; no move if none qualifies
    #[default]
    NearestSatisfying,
    /// First registered empty site in row-major order, taken unconditionally
    FirstAvailable,
}

/// Result of a relocation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved_to: Option<Coord>,
}

/// Attempt to relocate the agent at `(row, col)`
///
/// The registry must reflect the grid's current empty sites; it is updated
/// in place when a move commits. Every tentative mutation is either fully
/// committed or fully reverted before returning.
#[allow(clippy::too_many_arguments)]
pub fn relocate(
    grid: &mut Grid,
    registry: &mut EmptySiteRegistry,
    row: usize,
    col: usize,
    policy: RelocationPolicy,
    radius: usize,
    similarity_threshold: f64,
    occupancy_threshold: f64,
) -> Result<MoveOutcome> {
    if radius < 1 {
        return Err(SimError::InvalidRadius(radius));
    }
    let origin = Coord::new(row, col);
    let state = grid.get(row, col)?;
    if !state.is_occupied() {
        return Ok(MoveOutcome { moved_to: None });
    }
    let moved_to = relocate_known(
        grid,
        registry,
        origin,
        policy,
        radius,
        similarity_threshold,
        occupancy_threshold,
    );
    Ok(MoveOutcome { moved_to })
}

/// Relocation pass for a validated occupied origin
pub(crate) fn relocate_known(
    grid: &mut Grid,
    registry: &mut EmptySiteRegistry,
    origin: Coord,
    policy: RelocationPolicy,
    radius: usize,
    similarity_threshold: f64,
    occupancy_threshold: f64,
) -> Option<Coord> {
    let color = grid.state_at(origin);

    match policy {
        RelocationPolicy::FirstAvailable => {
            let dest = *registry.sites().first()?;
            commit_move(grid, registry, origin, dest, color);
            Some(dest)
        }
        RelocationPolicy::NearestSatisfying => {
            // Registry sites are row-major sorted; a stable sort by distance
            // keeps that order within each distance bucket, which is the
            // specified tie-break.
            let mut candidates = registry.sites().to_vec();
            candidates.sort_by_key(|site| origin.manhattan(*site));

            for dest in candidates {
                // Tentative swap: the vacated origin must count as empty
                // when the candidate neighborhood is evaluated.
                grid.put(dest, color);
                grid.put(origin, CellState::Empty);
                if satisfied_at(grid, dest, radius, similarity_threshold, occupancy_threshold) {
                    registry.occupy(dest);
                    registry.vacate(origin);
                    return Some(dest);
                }
                grid.put(origin, color);
                grid.put(dest, CellState::Empty);
            }
            None
        }
    }
}

fn commit_move(
    grid: &mut Grid,
    registry: &mut EmptySiteRegistry,
    origin: Coord,
    dest: Coord,
    color: CellState,
) {
    grid.put(dest, color);
    grid.put(origin, CellState::Empty);
    registry.occupy(dest);
    registry.vacate(origin);
}
