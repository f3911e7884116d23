//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::PLAYER_MAX_HEALTH;
use arena_core::enums::GamePhase;
use arena_core::events::{Alert, AudioEvent};
use arena_core::state::*;
use arena_core::types::{Position, SimTime, Velocity};

use crate::systems::camera;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    alerts: Vec<Alert>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let player = build_player(world);
    let camera = camera::follow_pose(&player.position, player.yaw);

    GameStateSnapshot {
        time: *time,
        phase,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        health_packs: build_health_packs(world),
        player,
        camera,
        alerts,
        audio_events,
    }
}

/// Build the player view from the singleton player tank.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&PlayerTank, &Position, &Orientation, &Health)>()
        .iter()
        .next()
        .map(|(_, (_, pos, orient, health))| PlayerView {
            position: *pos,
            yaw: orient.yaw,
            health: health.current,
            max_health: PLAYER_MAX_HEALTH,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&EnemyTank, &Position, &Orientation)>()
        .iter()
        .map(|(_, (_, pos, orient))| EnemyView {
            position: *pos,
            yaw: orient.yaw,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (proj, pos, vel))| ProjectileView {
            position: *pos,
            velocity: *vel,
            source: proj.source,
        })
        .collect()
}

fn build_health_packs(world: &World) -> Vec<HealthPackView> {
    world
        .query::<(&HealthPack, &Position)>()
        .iter()
        .map(|(_, (_, pos))| HealthPackView { position: *pos })
        .collect()
}
