//! Player movement from held keys, and aim from the pointer.

use hecs::World;

use cyberstrike_core::components::Player;
use cyberstrike_core::input::InputFrame;
use cyberstrike_core::types::Position;

use crate::tuning::CombatTuning;

/// Step the player once per held key, clamp to the arena interior,
/// then face the pointer.
pub fn run(world: &mut World, input: &InputFrame, tuning: &CombatTuning) {
    let (min, max) = tuning.player_bounds();

    for (_entity, (player, pos)) in world.query_mut::<(&mut Player, &mut Position)>() {
        for key in input.held.iter() {
            let (dx, dy) = key.direction();
            pos.x += dx * tuning.player_step;
            pos.y += dy * tuning.player_step;
        }
        pos.x = pos.x.clamp(min.x, max.x);
        pos.y = pos.y.clamp(min.y, max.y);

        player.facing = pos.angle_to(&input.pointer);
    }
}
