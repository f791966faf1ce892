//! Entity spawn factories for setting up the combat world.
//!
//! Creates the player, the fixed enemy roster, and the capture points with
//! appropriate component bundles.

use hecs::World;

use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::Team;
use cyberstrike_core::types::{Position, Velocity};

/// Set up a fresh combat world. Any previous combat entities are discarded.
pub fn setup_combat(world: &mut World) {
    world.clear();
    spawn_player(world, Position::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1));
    for (i, (x, y)) in ENEMY_SPAWNS.iter().enumerate() {
        spawn_enemy(world, i as u32 + 1, Position::new(*x, *y));
    }
    for (id, x, y) in CAPTURE_POINTS {
        spawn_capture_point(world, id, Position::new(x, y));
    }
}

/// Spawn the player at full health.
pub fn spawn_player(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        Player::default(),
        position,
        Health {
            current: MAX_HEALTH,
        },
    ))
}

/// Spawn a red enemy at full health.
pub fn spawn_enemy(world: &mut World, id: u32, position: Position) -> hecs::Entity {
    world.spawn((
        Enemy { id, team: Team::Red },
        position,
        Health {
            current: MAX_HEALTH,
        },
    ))
}

/// Spawn a neutral capture point with no progress.
pub fn spawn_capture_point(world: &mut World, id: char, position: Position) -> hecs::Entity {
    world.spawn((
        CapturePoint {
            id,
            progress: 0.0,
            owner: Team::Neutral,
        },
        position,
    ))
}

/// Spawn a projectile.
pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    position: Position,
    velocity: Velocity,
) -> hecs::Entity {
    world.spawn((Projectile { id }, position, velocity))
}

/// Current player position, if a player exists.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
