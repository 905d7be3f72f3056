//! Seeded random population generation
//!
//! Initial cell counts come from the configured fractions via floor-rounding:
//! the empty count is fixed first, then red and blue split the remaining
//! occupied budget. The resulting multiset of states is shuffled uniformly
//! with a seeded ChaCha8 generator so runs are reproducible.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{CellState, Coord};
use crate::grid::{CellCounts, Grid};

/// Initial cell counts implied by the configured fractions
pub fn population_counts(config: &SimConfig) -> CellCounts {
    let total = config.total_cells();
    let empty = (config.empty_fraction * total as f64).floor() as usize;
    let occupied = total - empty;

    let color_sum = config.red_fraction + config.blue_fraction;
    let red = if color_sum > 0.0 {
        ((config.red_fraction / color_sum) * occupied as f64).floor() as usize
    } else {
        0
    };
    let blue = occupied - red;

    CellCounts { red, blue, empty }
}

/// Build a randomly populated grid from a validated configuration
pub fn populate(config: &SimConfig) -> Result<Grid> {
    config.validate()?;
    Ok(generate(config))
}

/// Population step for a configuration already known to be valid
pub(crate) fn generate(config: &SimConfig) -> Grid {
    let counts = population_counts(config);
    let total = config.total_cells();

    let mut cells = Vec::with_capacity(total);
    cells.extend(std::iter::repeat(CellState::Red).take(counts.red));
    cells.extend(std::iter::repeat(CellState::Blue).take(counts.blue));
    cells.extend(std::iter::repeat(CellState::Empty).take(counts.empty));

    let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
    cells.shuffle(&mut rng);

    let size = config.size;
    let mut grid = Grid::filled(size, CellState::Empty);
    for (i, state) in cells.into_iter().enumerate() {
        grid.put(Coord::new(i / size, i % size), state);
    }
    grid
}
