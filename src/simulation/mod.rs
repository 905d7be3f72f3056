//! Simulation engine: satisfaction rule, relocation policy, and the
//! round-driving controller

pub mod controller;
pub mod relocation;
pub mod satisfaction;

pub use controller::{SimState, Simulation, TerminalState};
pub use relocation::{relocate, MoveOutcome, RelocationPolicy};
pub use satisfaction::is_satisfied;
