//! Collision resolution — projectile-vs-tank proximity checks.
//!
//! Removals are collected into a despawn buffer and applied after all
//! checks, so every projectile is evaluated exactly once per tick no
//! matter how many entities are removed.

use hecs::{Entity, World};

use arena_core::components::{EnemyTank, Health, PlayerTank, Projectile};
use arena_core::constants::HIT_RADIUS;
use arena_core::enums::{AlertLevel, ProjectileSource};
use arena_core::events::Alert;
use arena_core::types::Position;

/// Resolve all projectile collisions for this tick.
///
/// Returns true if the player's health reached zero — the engine turns
/// that into the terminal defeat transition.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    alerts: &mut Vec<Alert>,
    current_tick: u64,
) -> bool {
    despawn_buffer.clear();

    let player = world
        .query::<(&PlayerTank, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, pos))| (entity, *pos));

    let Some((player_entity, player_pos)) = player else {
        return false;
    };

    let enemies: Vec<(Entity, Position)> = world
        .query::<(&EnemyTank, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let hit_sq = HIT_RADIUS * HIT_RADIUS;
    let mut hits_on_player = 0u32;

    for (proj_entity, (proj, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        match proj.source {
            ProjectileSource::Enemy => {
                if pos.range_sq_to(&player_pos) < hit_sq {
                    hits_on_player += 1;
                    despawn_buffer.push(proj_entity);
                }
            }
            ProjectileSource::Player => {
                for (enemy_entity, enemy_pos) in &enemies {
                    // An enemy already claimed by an earlier projectile
                    // this tick can't be hit twice.
                    if despawn_buffer.contains(enemy_entity) {
                        continue;
                    }
                    if pos.range_sq_to(enemy_pos) < hit_sq {
                        despawn_buffer.push(*enemy_entity);
                        despawn_buffer.push(proj_entity);
                        // At most one enemy per projectile per tick.
                        break;
                    }
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if hits_on_player == 0 {
        return false;
    }

    let mut defeated = false;
    if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
        health.current = health.current.saturating_sub(hits_on_player);
        alerts.push(Alert {
            level: AlertLevel::Warning,
            message: format!("Health: {}", health.current),
            tick: current_tick,
        });
        defeated = health.current == 0;
    }
    defeated
}
