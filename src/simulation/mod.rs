//! Simulation module - headless batches of randomized shots
//!
//! Reports make percentage per aim scheme and power preset.

pub mod config;
pub mod metrics;
pub mod runner;

pub use config::SimConfig;
pub use metrics::{ComboResult, ShotOutcome, SimSummary};
pub use runner::{RandomShot, run_combo, run_shot, run_simulation};
