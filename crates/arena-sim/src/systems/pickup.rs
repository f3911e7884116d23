//! Health pickup system — interval spawning and collection.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::{Health, HealthPack, PlayerTank};
use arena_core::constants::*;
use arena_core::enums::AlertLevel;
use arena_core::events::Alert;
use arena_core::types::Position;

use crate::world_setup;

/// Spawn one health pack at a uniformly random spot in the pickup field.
/// Called by the engine when the spawn timer fires.
pub fn spawn_random(world: &mut World, rng: &mut ChaCha8Rng) {
    let x = rng.gen_range(-PICKUP_FIELD_HALF_EXTENT..PICKUP_FIELD_HALF_EXTENT);
    let z = rng.gen_range(-PICKUP_FIELD_HALF_EXTENT..PICKUP_FIELD_HALF_EXTENT);
    world_setup::spawn_health_pack(world, Position::new(x, PICKUP_HEIGHT, z));
}

/// Collect any packs within pickup radius of the player: +1 health each,
/// capped at the maximum, and the pack leaves the live set.
pub fn collect(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    alerts: &mut Vec<Alert>,
    current_tick: u64,
) {
    despawn_buffer.clear();

    let player = world
        .query::<(&PlayerTank, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, pos))| (entity, *pos));

    let Some((player_entity, player_pos)) = player else {
        return;
    };

    let pickup_sq = PICKUP_RADIUS * PICKUP_RADIUS;
    for (entity, (_pack, pos)) in world.query::<(&HealthPack, &Position)>().iter() {
        if pos.range_sq_to(&player_pos) < pickup_sq {
            despawn_buffer.push(entity);
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }

    let collected = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
        health.current = (health.current + collected).min(PLAYER_MAX_HEALTH);
        alerts.push(Alert {
            level: AlertLevel::Info,
            message: format!("Health: {}", health.current),
            tick: current_tick,
        });
    }
}
