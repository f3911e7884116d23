//! Player control system — drives the player tank from the held-key set.
//!
//! The hull advances along the negated facing direction (the barrel points
//! off the rear), so Forward subtracts the facing vector and Backward adds
//! it. Turning and driving may both apply in the same tick.

use hecs::World;

use arena_core::components::{Orientation, PlayerTank};
use arena_core::constants::{PLAYER_SPEED, TURN_RATE};
use arena_core::events::AudioEvent;
use arena_core::input::InputState;
use arena_core::types::{facing_direction, Position};

/// Apply held input to the player transform and track engine audio edges.
///
/// `engine_running` mirrors whether the engine loop sample is playing;
/// transitions emit start/stop events for the audio collaborator.
pub fn run(
    world: &mut World,
    input: &InputState,
    engine_running: &mut bool,
    audio_events: &mut Vec<AudioEvent>,
) {
    if input.any_held() {
        if !*engine_running {
            *engine_running = true;
            audio_events.push(AudioEvent::EngineStarted);
        }
    } else if *engine_running {
        *engine_running = false;
        audio_events.push(AudioEvent::EngineStopped);
    }

    for (_entity, (_player, pos, orient)) in
        world.query_mut::<(&PlayerTank, &mut Position, &mut Orientation)>()
    {
        let facing = facing_direction(orient.yaw);
        if input.forward {
            pos.translate(-facing * PLAYER_SPEED);
        }
        if input.backward {
            pos.translate(facing * PLAYER_SPEED);
        }
        if input.turn_left {
            orient.yaw += TURN_RATE;
        }
        if input.turn_right {
            orient.yaw -= TURN_RATE;
        }
    }
}
