//! Entity spawn factories for setting up the arena world.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::ProjectileSource;
use arena_core::types::{Position, Velocity};

/// Set up the initial arena: the player tank and the opening enemy.
pub fn setup_arena(world: &mut World) {
    spawn_player_tank(world);
    spawn_enemy_tank(world, Position::from_dvec3(ENEMY_START));
}

/// Spawn the player tank at the origin with full health.
pub fn spawn_player_tank(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerTank,
        Position::new(0.0, 0.0, 0.0),
        Orientation::default(),
        Health {
            current: PLAYER_MAX_HEALTH,
        },
    ))
}

/// Spawn an enemy tank. Enemies keep their initial yaw for the whole run;
/// steering translates the hull without turning it.
pub fn spawn_enemy_tank(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        EnemyTank,
        position,
        Orientation::default(),
        Velocity::default(),
    ))
}

/// Spawn a projectile with the given source marking.
pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    source: ProjectileSource,
) -> hecs::Entity {
    world.spawn((Projectile { source }, position, velocity))
}

/// Spawn a health pack at a fixed position.
pub fn spawn_health_pack(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((HealthPack, position))
}
