//! Read-only snapshots, round records, and run statistics
//!
//! Everything here is what the engine hands to its presentation
//! collaborator: serializable views, never live grid state.

use serde::{Deserialize, Serialize};

use crate::core::types::{CellState, Round};
use crate::grid::Grid;
use crate::simulation::controller::TerminalState;

/// Read-only snapshot of the grid: side length plus row-major states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub cells: Vec<CellState>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            cells: grid.cells().to_vec(),
        }
    }

    /// State at (row, col), `None` outside the grid
    pub fn state_at(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Plain-text rendering for terminal display
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            for cell in row {
                out.push(cell.glyph());
            }
            out.push('\n');
        }
        out
    }
}

/// Record of one completed round
///
/// The satisfied tally is evaluated against the start-of-round grid, before
/// any relocation, so the reported percentage is order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 0-based round index
    pub round: Round,
    /// Occupied cells at the start of the round
    pub occupied: usize,
    /// Satisfied occupied cells at the start of the round
    pub satisfied: usize,
    /// Relocations performed during the round
    pub relocations: usize,
    /// Whether at least one agent moved (false means convergence)
    pub any_move: bool,
}

impl RoundRecord {
    /// Percentage of occupied cells that were satisfied (0 when unpopulated)
    pub fn percent_satisfied(&self) -> f64 {
        if self.occupied == 0 {
            0.0
        } else {
            100.0 * self.satisfied as f64 / self.occupied as f64
        }
    }
}

/// Headline statistics for the most recently completed round
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationStats {
    pub round: Round,
    pub percent_satisfied: f64,
}

/// Aggregate statistics for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    pub rounds_completed: u64,
    pub total_relocations: u64,
    pub percent_satisfied: f64,
    pub terminal_state: TerminalState,
    pub simulation_time_ms: u64,
}

/// Complete output of a run, assembled by the external driver
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub final_grid: GridSnapshot,
    pub rounds: Vec<RoundRecord>,
    pub statistics: RunStats,
}

impl SimulationOutput {
    pub fn new(
        final_grid: GridSnapshot,
        rounds: Vec<RoundRecord>,
        terminal_state: TerminalState,
        total_relocations: u64,
        elapsed: std::time::Duration,
    ) -> Self {
        let percent_satisfied = rounds
            .last()
            .map(RoundRecord::percent_satisfied)
            .unwrap_or(0.0);
        let statistics = RunStats {
            rounds_completed: rounds.len() as u64,
            total_relocations,
            percent_satisfied,
            terminal_state,
            simulation_time_ms: elapsed.as_millis() as u64,
        };
        Self {
            final_grid,
            rounds,
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "{:?} after {} rounds, {} relocations, {:.2}% satisfied",
            self.statistics.terminal_state,
            self.statistics.rounds_completed,
            self.statistics.total_relocations,
            self.statistics.percent_satisfied,
        )
    }
}
