//! Simulation controller
//!
//! Owns the grid, the round counter, and the run state machine
//! `Idle -> Running -> (Converged | Exhausted | Stopped)`. One `step()` is
//! one full deterministic row-major pass over the grid; convergence is a
//! round in which zero relocations occurred.
//!
//! Execution is single-threaded and synchronous. `stop()` takes effect only
//! at round boundaries; a round in progress always runs to completion.

use serde::Serialize;

use crate::core::config::SimConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::Coord;
use crate::grid::populate::generate;
use crate::grid::{EmptySiteRegistry, Grid};
use crate::output::{GridSnapshot, RoundRecord, SimulationStats};
use crate::simulation::relocation::relocate_known;
use crate::simulation::satisfaction::satisfied_at;

/// Run state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimState {
    /// Grid built, no round completed yet
    Idle,
    /// At least one round completed, agents still moving
    Running,
    /// Fixed point reached: a full round produced zero relocations
    Converged,
    /// Round budget spent without convergence
    Exhausted,
    /// Halted externally at a round boundary
    Stopped,
}

/// Why `run_to_completion` stopped producing rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminalState {
    Converged,
    Exhausted,
    Stopped,
}

/// Schelling simulation instance
///
/// All run state lives on the instance; there are no process-wide counters
/// or timers. Any external driver (timer loop, CLI, batch harness) may call
/// `step()` sequentially.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    state: SimState,
    round: u64,
    total_relocations: u64,
    last_record: RoundRecord,
}

impl Simulation {
    /// Build a simulation with a randomly populated grid
    ///
    /// Fails fast with `InvalidConfiguration` before any grid is built.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let grid = generate(&config);
        tracing::info!(
            size = config.size,
            seed = config.rng_seed,
            "simulation initialized"
        );
        Ok(Self::from_parts(config, grid))
    }

    /// Build a simulation over an explicitly assigned grid
    ///
    /// The grid must match the configured size; population fractions in the
    /// config are ignored.
    pub fn with_grid(config: SimConfig, grid: Grid) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.size {
            return Err(SimError::InvalidConfiguration(format!(
                "grid size {} does not match configured size {}",
                grid.size(),
                config.size
            )));
        }
        Ok(Self::from_parts(config, grid))
    }

    fn from_parts(config: SimConfig, grid: Grid) -> Self {
        let last_record = initial_record(&grid, &config);
        Self {
            config,
            grid,
            state: SimState::Idle,
            round: 0,
            total_relocations: 0,
            last_record,
        }
    }

    /// Execute exactly one round
    ///
    /// The satisfied/occupied tally is evaluated before any move, so the
    /// returned record reflects the start-of-round grid. The pass itself is
    /// evaluated live: later cells observe earlier relocations. In the
    /// `Stopped` state the last record is returned without running a pass.
    pub fn step(&mut self) -> RoundRecord {
        if self.state == SimState::Stopped {
            return self.last_record;
        }

        let (occupied, satisfied) = tally(&self.grid, &self.config);
        let mut registry = EmptySiteRegistry::scan(&self.grid);

        let mut relocations = 0usize;
        let coords: Vec<Coord> = self.grid.iter_coords().collect();
        for coord in coords {
            if !self.grid.state_at(coord).is_occupied() {
                continue;
            }
            if satisfied_at(
                &self.grid,
                coord,
                self.config.radius,
                self.config.similarity_threshold,
                self.config.occupancy_threshold,
            ) {
                continue;
            }
            let moved = relocate_known(
                &mut self.grid,
                &mut registry,
                coord,
                self.config.policy,
                self.config.radius,
                self.config.similarity_threshold,
                self.config.occupancy_threshold,
            );
            if let Some(dest) = moved {
                tracing::trace!(
                    from = ?coord,
                    to = ?dest,
                    "agent relocated"
                );
                relocations += 1;
            }
        }

        let record = RoundRecord {
            round: self.round,
            occupied,
            satisfied,
            relocations,
            any_move: relocations > 0,
        };
        self.round += 1;
        self.total_relocations += relocations as u64;
        self.state = if record.any_move {
            SimState::Running
        } else {
            SimState::Converged
        };
        self.last_record = record;
        tracing::debug!(
            round = record.round,
            relocations,
            satisfied,
            occupied,
            "round complete"
        );
        record
    }

    /// Step until convergence, exhaustion of the round budget, or an
    /// external stop
    pub fn run_to_completion(&mut self, max_rounds: u64) -> TerminalState {
        loop {
            match self.state {
                SimState::Converged => return TerminalState::Converged,
                SimState::Stopped => return TerminalState::Stopped,
                _ => {}
            }
            if self.round >= max_rounds {
                self.state = SimState::Exhausted;
                return TerminalState::Exhausted;
            }
            self.step();
        }
    }

    /// Halt further rounds; never rolls back a completed round
    pub fn stop(&mut self) {
        if self.state == SimState::Running {
            self.state = SimState::Stopped;
        }
    }

    /// Rebuild the grid from the same configuration and seed
    pub fn reset(&mut self) {
        self.grid = generate(&self.config);
        self.round = 0;
        self.total_relocations = 0;
        self.state = SimState::Idle;
        self.last_record = initial_record(&self.grid, &self.config);
        tracing::info!(seed = self.config.rng_seed, "simulation reset");
    }

    /// Read-only view of the current grid
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(&self.grid)
    }

    /// Headline statistics for the most recently completed round
    ///
    /// Before the first `step()` this reflects the initial grid.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            round: self.last_record.round,
            percent_satisfied: self.last_record.percent_satisfied(),
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn rounds_completed(&self) -> u64 {
        self.round
    }

    pub fn total_relocations(&self) -> u64 {
        self.total_relocations
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Count occupied and satisfied cells without mutating the grid
fn tally(grid: &Grid, config: &SimConfig) -> (usize, usize) {
    let mut occupied = 0;
    let mut satisfied = 0;
    for coord in grid.iter_coords() {
        if !grid.state_at(coord).is_occupied() {
            continue;
        }
        occupied += 1;
        if satisfied_at(
            grid,
            coord,
            config.radius,
            config.similarity_threshold,
            config.occupancy_threshold,
        ) {
            satisfied += 1;
        }
    }
    (occupied, satisfied)
}

fn initial_record(grid: &Grid, config: &SimConfig) -> RoundRecord {
    let (occupied, satisfied) = tally(grid, config);
    RoundRecord {
        round: 0,
        occupied,
        satisfied,
        relocations: 0,
        any_move: false,
    }
}
