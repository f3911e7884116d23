//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Movement input began — start the engine loop.
    EngineStarted,
    /// All movement input released — pause the engine loop and rewind it.
    EngineStopped,
    /// Player fired a shot (one-shot sample).
    ShotFired,
}

/// Alert for the UI notification queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
