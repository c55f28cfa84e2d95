//! Simulation engine for the wizard duel.
//!
//! Owns the hecs actor registry, runs systems at a fixed tick rate,
//! resolves host-reported contacts and produces `GameStateSnapshot`s.

pub mod engine;
pub mod scheduler;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use wizard_core as core;
