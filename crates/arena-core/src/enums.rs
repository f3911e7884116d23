//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Player health reached zero. Terminal: systems stop running and
    /// input is frozen until a new game is started.
    Defeat,
}

/// Logical input keys recognized by the simulation.
///
/// Drive and turn keys are level-triggered (held); Fire is edge-triggered
/// (one shot per key-down event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Fire,
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSource {
    Player,
    Enemy,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
