//! Bounded Moore neighborhood queries
//!
//! A neighborhood is every cell within Chebyshev distance R of the center,
//! center excluded, clipped to the grid bounds. No wraparound: a corner cell
//! at R=1 has 3 neighbors, not 8.

use crate::core::error::{Result, SimError};
use crate::core::types::{CellState, Coord};
use crate::grid::Grid;

/// Neighbor states around (row, col) within radius R
///
/// Returned in row-major order (deterministic, required by tests), center
/// skipped. Fails with `InvalidRadius` for R < 1 and `OutOfBounds` for a
/// center outside the grid.
pub fn neighbors(grid: &Grid, row: usize, col: usize, radius: usize) -> Result<Vec<CellState>> {
    if radius < 1 {
        return Err(SimError::InvalidRadius(radius));
    }
    grid.get(row, col)?;
    Ok(neighbor_states(grid, Coord::new(row, col), radius))
}

/// Clipped neighborhood scan for a validated center and radius
pub(crate) fn neighbor_states(grid: &Grid, center: Coord, radius: usize) -> Vec<CellState> {
    let size = grid.size();
    let row_lo = center.row.saturating_sub(radius);
    let row_hi = (center.row + radius).min(size - 1);
    let col_lo = center.col.saturating_sub(radius);
    let col_hi = (center.col + radius).min(size - 1);

    let span = 2 * radius + 1;
    let mut states = Vec::with_capacity(span * span - 1);
    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if row == center.row && col == center.col {
                continue;
            }
            states.push(grid.state_at(Coord::new(row, col)));
        }
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: usize) -> Grid {
        let cells = (0..size * size)
            .map(|i| {
                if (i / size + i % size) % 2 == 0 {
                    CellState::Red
                } else {
                    CellState::Blue
                }
            })
            .collect();
        Grid::from_cells(size, cells).unwrap()
    }

    #[test]
    fn test_interior_cell_has_full_neighborhood() {
        let grid = checkerboard(5);
        let states = neighbors(&grid, 2, 2, 1).unwrap();
        assert_eq!(states.len(), 8);
        let states = neighbors(&grid, 2, 2, 2).unwrap();
        assert_eq!(states.len(), 24);
    }

    #[test]
    fn test_corner_and_edge_cells_are_clipped() {
        let grid = checkerboard(5);
        assert_eq!(neighbors(&grid, 0, 0, 1).unwrap().len(), 3);
        assert_eq!(neighbors(&grid, 4, 4, 1).unwrap().len(), 3);
        assert_eq!(neighbors(&grid, 0, 2, 1).unwrap().len(), 5);
    }

    #[test]
    fn test_radius_larger_than_grid_clips_to_whole_grid() {
        let grid = checkerboard(3);
        let states = neighbors(&grid, 1, 1, 10).unwrap();
        assert_eq!(states.len(), 8);
    }

    #[test]
    fn test_order_is_row_major_and_excludes_center() {
        let mut grid = Grid::filled(3, CellState::Empty);
        grid.set(0, 0, CellState::Red).unwrap();
        grid.set(0, 1, CellState::Blue).unwrap();
        grid.set(1, 0, CellState::Blue).unwrap();
        grid.set(1, 1, CellState::Red).unwrap(); // center
        let states = neighbors(&grid, 1, 1, 1).unwrap();
        assert_eq!(
            states,
            vec![
                CellState::Red,   // (0,0)
                CellState::Blue,  // (0,1)
                CellState::Empty, // (0,2)
                CellState::Blue,  // (1,0)
                CellState::Empty, // (1,2)
                CellState::Empty, // (2,0)
                CellState::Empty, // (2,1)
                CellState::Empty, // (2,2)
            ]
        );
    }

    #[test]
    fn test_invalid_radius() {
        let grid = checkerboard(3);
        assert!(matches!(
            neighbors(&grid, 1, 1, 0),
            Err(SimError::InvalidRadius(0))
        ));
    }

    #[test]
    fn test_out_of_bounds_center() {
        let grid = checkerboard(3);
        assert!(neighbors(&grid, 3, 1, 1).is_err());
    }
}
