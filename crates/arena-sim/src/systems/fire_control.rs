//! Fire control — spawns projectiles from tank barrel tips.
//!
//! Player shots are edge-triggered by input commands; enemy volleys run on
//! a fixed wall-clock interval polled by the engine. There is no cooldown
//! on the player gun: one shot per fire press, however fast they arrive.

use glam::DVec3;
use hecs::World;

use arena_core::components::{EnemyTank, Orientation, PlayerTank};
use arena_core::constants::*;
use arena_core::enums::ProjectileSource;
use arena_core::events::AudioEvent;
use arena_core::types::{facing_direction, Position, Velocity};

use crate::world_setup;

/// World position of a tank's barrel tip: tank center raised to barrel
/// height, then offset along the facing direction.
pub fn barrel_tip(tank_pos: &Position, yaw: f64) -> Position {
    let tip = tank_pos.as_dvec3()
        + DVec3::new(0.0, BARREL_HEIGHT, 0.0)
        + facing_direction(yaw) * BARREL_TIP_OFFSET;
    Position::from_dvec3(tip)
}

/// Spawn one player projectile from the player's barrel tip, flying along
/// the facing direction. Emits the fire-sound event.
pub fn fire_player_projectile(world: &mut World, audio_events: &mut Vec<AudioEvent>) {
    let pose = world
        .query_mut::<(&PlayerTank, &Position, &Orientation)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos, orient))| (*pos, orient.yaw));

    let Some((pos, yaw)) = pose else {
        return;
    };

    let velocity = Velocity::from_dvec3(facing_direction(yaw) * PLAYER_PROJECTILE_SPEED);
    world_setup::spawn_projectile(world, barrel_tip(&pos, yaw), velocity, ProjectileSource::Player);
    audio_events.push(AudioEvent::ShotFired);
}

/// Every live enemy fires one shot at the player's current position.
///
/// The shot originates at the enemy's own barrel tip but flies along the
/// line to the player, independent of the enemy's facing.
pub fn run_enemy_volley(world: &mut World) {
    let player_pos = world
        .query_mut::<(&PlayerTank, &Position)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    let Some(player_pos) = player_pos else {
        return;
    };

    let shooters: Vec<(Position, f64)> = world
        .query_mut::<(&EnemyTank, &Position, &Orientation)>()
        .into_iter()
        .map(|(_, (_, pos, orient))| (*pos, orient.yaw))
        .collect();

    for (enemy_pos, yaw) in shooters {
        let to_player = (player_pos.as_dvec3() - enemy_pos.as_dvec3()).normalize_or_zero();
        let velocity = Velocity::from_dvec3(to_player * ENEMY_PROJECTILE_SPEED);
        world_setup::spawn_projectile(
            world,
            barrel_tip(&enemy_pos, yaw),
            velocity,
            ProjectileSource::Enemy,
        );
    }
}
