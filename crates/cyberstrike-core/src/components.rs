//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Team;

/// Marks the player-controlled combatant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    /// Facing angle in radians, toward the latest pointer position.
    pub facing: f64,
}

/// Enemy combatant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub team: Team,
}

/// Hit points, kept within `[0, MAX_HEALTH]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Spawn-ordered identifier, unique within one combat session.
    pub id: u32,
}

/// A fixed capture location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapturePoint {
    pub id: char,
    /// Capture progress, `0.0..=100.0`.
    pub progress: f64,
    pub owner: Team,
}
