//! Simulation configuration
//!
//! Immutable per-run parameters. Validation is fail-fast: a run never starts
//! with a config outside its documented domain.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{Result, SimError};
use crate::simulation::relocation::RelocationPolicy;

/// Tolerance when checking that population fractions sum to 1
const FRACTION_SUM_EPS: f64 = 1e-6;

/// Configuration for a simulation run
///
/// Fractions define initial cell counts via floor-rounding: the empty count
/// is computed first from `empty_fraction`, then red and blue split the
/// remaining occupied budget.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid side length N (the grid holds N x N cells)
    pub size: usize,
    /// Target fraction of all cells holding red agents
    pub red_fraction: f64,
    /// Target fraction of all cells holding blue agents
    pub blue_fraction: f64,
    /// Target fraction of all cells left empty
    pub empty_fraction: f64,
    /// Moore neighborhood radius R (Chebyshev distance, center excluded)
    pub radius: usize,
    /// Minimum fraction of neighbors sharing the agent's color
    pub similarity_threshold: f64,
    /// Minimum fraction of neighbors that must be occupied
    pub occupancy_threshold: f64,
    /// Maximum number of rounds before the run is declared exhausted
    pub max_rounds: u64,
    /// Seed for the deterministic population shuffle
    pub rng_seed: u64,
    /// Relocation policy applied to every unsatisfied agent in the run
    pub policy: RelocationPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 20,
            red_fraction: 0.45,
            blue_fraction: 0.45,
            empty_fraction: 0.10,
            radius: 1,
            similarity_threshold: 0.5,
            occupancy_threshold: 0.0,
            max_rounds: 100,
            rng_seed: 42,
            policy: RelocationPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Validate all parameters against their documented domains
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SimError::InvalidConfiguration(
                "grid size must be at least 1".into(),
            ));
        }
        if self.radius < 1 {
            return Err(SimError::InvalidConfiguration(
                "neighborhood radius must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("red_fraction", self.red_fraction),
            ("blue_fraction", self.blue_fraction),
            ("empty_fraction", self.empty_fraction),
            ("similarity_threshold", self.similarity_threshold),
            ("occupancy_threshold", self.occupancy_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(SimError::InvalidConfiguration(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        let sum = self.red_fraction + self.blue_fraction + self.empty_fraction;
        if (sum - 1.0).abs() > FRACTION_SUM_EPS {
            return Err(SimError::InvalidConfiguration(format!(
                "population fractions must sum to 1, got {}",
                sum
            )));
        }
        Ok(())
    }

    /// Load a configuration from a TOML file
    ///
    /// Used by the CLI driver only; the engine takes the struct directly.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SimError::InvalidConfiguration(format!("config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| SimError::InvalidConfiguration(format!("config parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Total number of cells in the grid
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }
}
