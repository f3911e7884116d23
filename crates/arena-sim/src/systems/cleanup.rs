//! Cleanup system: expires projectiles that have flown out of play.

use hecs::{Entity, World};

use arena_core::components::{PlayerTank, Projectile};
use arena_core::constants::PROJECTILE_DESPAWN_RADIUS;
use arena_core::types::Position;

/// Despawn projectiles beyond the despawn radius.
///
/// The radius is measured from the player's current position, not from
/// each projectile's origin, so enemy shots flying away from the player
/// expire relative to wherever the player is now.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let player_pos = world
        .query::<(&PlayerTank, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    let Some(player_pos) = player_pos else {
        return;
    };

    let radius_sq = PROJECTILE_DESPAWN_RADIUS * PROJECTILE_DESPAWN_RADIUS;
    for (entity, (_proj, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        if pos.range_sq_to(&player_pos) > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
