//! Enemy steering — every enemy seeks the player with bounded jitter.
//!
//! Single behavior state. Each tick the enemy's velocity is recomputed
//! from scratch: a unit vector toward the player scaled to seek speed,
//! plus one uniform random scalar applied to both horizontal axes so
//! convergence is not perfectly straight.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::{EnemyTank, PlayerTank};
use arena_core::constants::{ENEMY_JITTER, ENEMY_SEEK_SPEED};
use arena_core::types::{Position, Velocity};

use glam::DVec3;

/// Recompute every enemy's velocity for this tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    let player_pos = world
        .query_mut::<(&PlayerTank, &Position)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    let Some(player_pos) = player_pos else {
        return;
    };

    for (_entity, (_enemy, pos, vel)) in
        world.query_mut::<(&EnemyTank, &Position, &mut Velocity)>()
    {
        let jitter = rng.gen_range(-ENEMY_JITTER..=ENEMY_JITTER);
        *vel = seek_velocity(pos, &player_pos, jitter);
    }
}

/// Pure steering rule, split out so tests can drive it with zero jitter.
pub fn seek_velocity(enemy: &Position, player: &Position, jitter: f64) -> Velocity {
    let to_player = (player.as_dvec3() - enemy.as_dvec3()).normalize_or_zero();
    Velocity::from_dvec3(to_player * ENEMY_SEEK_SPEED + DVec3::new(jitter, 0.0, jitter))
}
