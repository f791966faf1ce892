//! Events emitted by the simulation for UI feedback and score deltas.

use serde::{Deserialize, Serialize};

use crate::enums::{ScreenMode, Team, UpgradeOutcome};
use crate::types::WeaponId;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Projectile struck an enemy.
    EnemyHit {
        enemy_id: u32,
        projectile_id: u32,
        remaining_health: f64,
    },
    /// Enemy health reached zero.
    EnemyKilled {
        enemy_id: u32,
        team: Team,
        score_delta: u32,
    },
    /// Capture point flipped to a new owner.
    PointCaptured {
        point_id: char,
        team: Team,
        score_delta: u32,
    },
    /// Upgrade request was processed.
    WeaponUpgrade {
        weapon_id: WeaponId,
        outcome: UpgradeOutcome,
    },
    /// Screen mode changed.
    ModeChanged { from: ScreenMode, to: ScreenMode },
}
