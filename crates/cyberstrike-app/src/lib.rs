//! CYBER STRIKE runtime.
//!
//! This crate wires the simulation engine to a fixed-rate game loop thread,
//! stages device input for it, and drives a scripted session from the binary.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod session;
pub mod state;
pub mod telemetry;

pub use cyberstrike_core as core;
