//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use cyberstrike_core::components::*;
use cyberstrike_core::enums::ScreenMode;
use cyberstrike_core::events::GameEvent;
use cyberstrike_core::state::*;
use cyberstrike_core::types::{Position, SimTime, Velocity, WeaponId};
use cyberstrike_core::weapons::Armory;

use crate::scoring::ScoreBoard;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    mode: ScreenMode,
    armory: &Armory,
    selected_weapon: Option<WeaponId>,
    score: &ScoreBoard,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        mode,
        selected_weapon,
        weapons: armory.weapons().to_vec(),
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        capture_points: build_capture_points(world),
        score: score.view(),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Health)>()
        .iter()
        .next()
        .map(|(_, (player, pos, health))| PlayerView {
            position: *pos,
            health: health.current,
            facing: player.facing,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| EnemyView {
            id: enemy.id,
            position: *pos,
            health: health.current,
            team: enemy.team,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            position: *pos,
            velocity: *vel,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_capture_points(world: &World) -> Vec<CapturePointView> {
    let mut points: Vec<CapturePointView> = world
        .query::<(&CapturePoint, &Position)>()
        .iter()
        .map(|(_, (point, pos))| CapturePointView {
            id: point.id,
            position: *pos,
            progress: point.progress,
            owner: point.owner,
        })
        .collect();
    points.sort_by_key(|p| p.id);
    points
}
