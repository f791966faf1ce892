//! Projectile spawning from clicks and straight-line integration.

use hecs::{Entity, World};
use tracing::trace;

use cyberstrike_core::components::Projectile;
use cyberstrike_core::types::{Position, Velocity};

use crate::tuning::CombatTuning;
use crate::world_setup;

/// Spawn one projectile per click, from the player toward the click position.
/// Does nothing when no player exists.
pub fn spawn_from_clicks(
    world: &mut World,
    clicks: &[Position],
    next_projectile_id: &mut u32,
    tuning: &CombatTuning,
) {
    let Some(origin) = world_setup::player_position(world) else {
        return;
    };

    for target in clicks {
        let velocity = Velocity::from_angle(origin.angle_to(target), tuning.projectile_speed);
        let id = *next_projectile_id;
        *next_projectile_id = next_projectile_id.wrapping_add(1);
        world_setup::spawn_projectile(world, id, origin, velocity);
        trace!(projectile_id = id, x = origin.x, y = origin.y, "projectile spawned");
    }
}

/// Advance every projectile by its velocity and discard the ones that left the arena.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn advance(world: &mut World, tuning: &CombatTuning, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let (min, max) = tuning.arena_bounds();

    for (entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        if !pos.within(min, max) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
