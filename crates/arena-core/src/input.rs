//! Held-key state sampled by the player control system each tick.

use serde::{Deserialize, Serialize};

use crate::enums::InputKey;

/// The set of movement/turn keys currently held.
///
/// `Fire` is deliberately absent: it is edge-triggered and handled
/// directly when its key-down command is processed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputState {
    pub fn press(&mut self, key: InputKey) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: InputKey) {
        self.set(key, false);
    }

    fn set(&mut self, key: InputKey, held: bool) {
        match key {
            InputKey::Forward => self.forward = held,
            InputKey::Backward => self.backward = held,
            InputKey::TurnLeft => self.turn_left = held,
            InputKey::TurnRight => self.turn_right = held,
            InputKey::Fire => {}
        }
    }

    /// True while any movement or turn key is held (drives engine audio).
    pub fn any_held(&self) -> bool {
        self.forward || self.backward || self.turn_left || self.turn_right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
