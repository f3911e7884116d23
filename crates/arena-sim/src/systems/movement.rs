//! Kinematic integration system.
//!
//! Simple Euler integration with a unit timestep: position += velocity
//! once per tick, for every entity that carries a Velocity (enemy tanks
//! and projectiles; the player is moved directly by player control).

use hecs::World;

use arena_core::components::EnemyTank;
use arena_core::constants::GROUND_LEVEL;
use arena_core::types::{Position, Velocity};

/// Integrate all moving entities, then clamp enemy hulls to the ground.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
        pos.z += vel.z;
    }

    // Steering jitter has no vertical component, but the seek vector can:
    // enemies track the player's center, so the hull is re-grounded here.
    for (_entity, (_enemy, pos)) in world.query_mut::<(&EnemyTank, &mut Position)>() {
        pos.y = GROUND_LEVEL;
    }
}
