//! ECS systems that operate on the combat world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.
//! The engine runs them in a fixed order, see `SimulationEngine::tick`.

pub mod capture;
pub mod collision;
pub mod player_movement;
pub mod projectiles;
pub mod pursuit;
pub mod snapshot;
