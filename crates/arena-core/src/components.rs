//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileSource;

/// Marks the player-controlled tank (singleton).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTank;

/// Marks a scripted enemy tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyTank;

/// Marks a collectible health pack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthPack;

/// Tank heading about the +y axis (radians).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
}

/// An in-flight shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub source: ProjectileSource,
}

/// Hit points. Attached to the player tank only; enemies die in one hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
}
