//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity, WeaponId};
use crate::weapons::Weapon;

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub mode: ScreenMode,
    pub selected_weapon: Option<WeaponId>,
    pub weapons: Vec<Weapon>,
    /// `None` outside of combat.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub capture_points: Vec<CapturePointView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: f64,
    /// Facing angle in radians.
    pub facing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub health: f64,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturePointView {
    pub id: char,
    pub position: Position,
    pub progress: f64,
    pub owner: Team,
}

/// Per-team counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub score: u32,
    pub kills: u32,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub red: TeamScore,
    pub blue: TeamScore,
}
