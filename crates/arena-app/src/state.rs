//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use arena_core::commands::PlayerCommand;
use arena_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, updated by the game loop after each tick.
/// Shared with whatever layer renders or inspects the game state.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let slot: SharedSnapshot = Arc::new(Mutex::new(None));
        assert!(slot.lock().unwrap().is_none());
    }
}
