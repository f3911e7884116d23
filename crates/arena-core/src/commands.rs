//! Player commands sent from the host/input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so all
//! input sources are serialized through a single consumer regardless of
//! how the host delivers them.

use serde::{Deserialize, Serialize};

use crate::enums::InputKey;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// A key was pressed. `Fire` spawns one projectile per press.
    KeyDown { key: InputKey },
    /// A key was released.
    KeyUp { key: InputKey },

    // --- Simulation control ---
    /// Start a new run (from the main menu or after defeat).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
