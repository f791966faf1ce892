//! Simulation engine for CYBER STRIKE.
//!
//! Owns the hecs ECS world, runs the combat systems at a fixed tick rate,
//! drives screen navigation, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod scoring;
pub mod systems;
pub mod tuning;
pub mod world_setup;

pub use cyberstrike_core as core;
pub use engine::SimulationEngine;
