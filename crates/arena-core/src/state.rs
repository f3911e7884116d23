//! Game state snapshot — the complete renderable state emitted each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, ProjectileSource};
use crate::events::{Alert, AudioEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete game state handed to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub health_packs: Vec<HealthPackView>,
    pub camera: CameraView,
    pub alerts: Vec<Alert>,
    pub audio_events: Vec<AudioEvent>,
}

/// The player tank's renderable transform and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub yaw: f64,
    pub health: u32,
    pub max_health: u32,
}

/// An enemy tank's renderable transform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub yaw: f64,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub source: ProjectileSource,
}

/// A live health pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthPackView {
    pub position: Position,
}

/// Chase-camera pose recomputed from the player transform each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Position,
    pub look_at: Position,
}
