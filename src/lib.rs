//! Schelling Model of Housing Segregation
//!
//! Simulation engine for a two-color Schelling segregation model on a
//! bounded N x N lattice. The engine is deterministic for a given seed and
//! exposes a round-at-a-time state machine that any external driver (CLI,
//! timer loop, batch harness) can step.

pub mod core;
pub mod grid;
pub mod output;
pub mod simulation;

pub use crate::core::config::SimConfig;
pub use crate::core::error::{Result, SimError};
pub use crate::core::types::{CellState, Coord, Round};
pub use crate::grid::{neighbors, populate, population_counts, CellCounts, EmptySiteRegistry, Grid};
pub use crate::output::{GridSnapshot, RoundRecord, SimulationOutput, SimulationStats};
pub use crate::simulation::{
    is_satisfied, relocate, MoveOutcome, RelocationPolicy, SimState, Simulation, TerminalState,
};
