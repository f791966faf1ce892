//! Enemy pursuit: close on the player until within engagement radius.

use glam::DVec2;
use hecs::World;

use cyberstrike_core::components::{Enemy, Health};
use cyberstrike_core::types::Position;

use crate::tuning::CombatTuning;
use crate::world_setup;

pub fn run(world: &mut World, tuning: &CombatTuning) {
    let Some(target) = world_setup::player_position(world) else {
        return;
    };
    let target: DVec2 = target.as_dvec2();

    for (_entity, (_enemy, pos, health)) in
        world.query_mut::<(&Enemy, &mut Position, &Health)>()
    {
        if health.current <= 0.0 {
            continue;
        }

        let to_player = target - pos.as_dvec2();
        // Inside engagement radius the enemy holds; no melee attack exists.
        if to_player.length() > tuning.enemy_engage_radius {
            *pos = Position::from(pos.as_dvec2() + to_player.normalize() * tuning.enemy_speed);
        }
    }
}
