//! Gameplay tuning for combat.
//!
//! Every field defaults to the matching constant in `cyberstrike_core::constants`.
//! Keep this separate from runtime configuration (tick pacing, logging).

use serde::{Deserialize, Serialize};

use cyberstrike_core::constants::*;
use cyberstrike_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub arena_width: f64,
    pub arena_height: f64,
    /// Inset from the arena edges the player is clamped to.
    pub arena_margin: f64,

    /// Player displacement per held key per tick.
    pub player_step: f64,

    /// Enemy pursuit speed per tick.
    pub enemy_speed: f64,
    /// Enemies hold position once this close to the player.
    pub enemy_engage_radius: f64,

    /// Projectile speed per tick.
    pub projectile_speed: f64,
    pub hit_radius: f64,
    pub projectile_damage: f64,

    pub capture_radius: f64,
    /// Progress gained per tick inside the capture radius.
    pub capture_rate: f64,

    pub kill_score: u32,
    pub capture_score: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            arena_margin: ARENA_MARGIN,
            player_step: PLAYER_STEP,
            enemy_speed: ENEMY_SPEED,
            enemy_engage_radius: ENEMY_ENGAGE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            hit_radius: PROJECTILE_HIT_RADIUS,
            projectile_damage: PROJECTILE_DAMAGE,
            capture_radius: CAPTURE_RADIUS,
            capture_rate: CAPTURE_RATE,
            kill_score: KILL_SCORE,
            capture_score: CAPTURE_SCORE,
        }
    }
}

impl CombatTuning {
    /// Arena rectangle corners; projectiles outside it are discarded.
    pub fn arena_bounds(&self) -> (Position, Position) {
        (
            Position::new(0.0, 0.0),
            Position::new(self.arena_width, self.arena_height),
        )
    }

    /// Interior rectangle the player is clamped to.
    pub fn player_bounds(&self) -> (Position, Position) {
        (
            Position::new(self.arena_margin, self.arena_margin),
            Position::new(
                self.arena_width - self.arena_margin,
                self.arena_height - self.arena_margin,
            ),
        )
    }
}
