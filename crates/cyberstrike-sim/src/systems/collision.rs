//! Projectile vs enemy collision resolution.
//!
//! Enemies are visited in ascending id order; each takes at most one hit per
//! tick from the lowest-id projectile within the hit radius, and a projectile
//! is consumed by the first enemy it hits. Both enemy and projectile positions
//! are the ones after this tick's movement.

use hecs::{Entity, World};
use tracing::debug;

use cyberstrike_core::components::{Enemy, Health, Projectile};
use cyberstrike_core::enums::Team;
use cyberstrike_core::events::GameEvent;
use cyberstrike_core::types::Position;

use crate::scoring::ScoreBoard;
use crate::tuning::CombatTuning;

/// Scorer credited with kills; the player fights for Blue.
const SHOOTER_TEAM: Team = Team::Blue;

pub fn run(
    world: &mut World,
    tuning: &CombatTuning,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut projectiles: Vec<(u32, Entity, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| (projectile.id, entity, *pos))
        .collect();
    projectiles.sort_by_key(|(id, _, _)| *id);

    let mut enemies: Vec<(u32, Entity, Position)> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.current > 0.0)
        .map(|(entity, (enemy, pos, _))| (enemy.id, entity, *pos))
        .collect();
    enemies.sort_by_key(|(id, _, _)| *id);

    let mut consumed = vec![false; projectiles.len()];

    for (enemy_id, enemy_entity, enemy_pos) in enemies {
        let hit = projectiles.iter().enumerate().find(|(i, (_, _, pos))| {
            !consumed[*i] && pos.range_to(&enemy_pos) <= tuning.hit_radius
        });
        let Some((index, (projectile_id, projectile_entity, _))) = hit else {
            continue;
        };
        consumed[index] = true;
        despawn_buffer.push(*projectile_entity);

        let remaining = match world.get::<&mut Health>(enemy_entity) {
            Ok(mut health) => {
                health.current = (health.current - tuning.projectile_damage).max(0.0);
                health.current
            }
            Err(_) => continue,
        };
        debug!(enemy_id, projectile_id, remaining, "enemy hit");
        events.push(GameEvent::EnemyHit {
            enemy_id,
            projectile_id: *projectile_id,
            remaining_health: remaining,
        });

        if remaining <= 0.0 {
            score.award_kill(SHOOTER_TEAM, tuning.kill_score);
            debug!(enemy_id, "enemy killed");
            events.push(GameEvent::EnemyKilled {
                enemy_id,
                team: SHOOTER_TEAM,
                score_delta: tuning.kill_score,
            });
            despawn_buffer.push(enemy_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
