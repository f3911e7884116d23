#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{Alert, AudioEvent};
    use crate::input::InputState;
    use crate::state::GameStateSnapshot;
    use crate::types::{facing_direction, Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_input_key_serde() {
        let variants = vec![
            InputKey::Forward,
            InputKey::Backward,
            InputKey::TurnLeft,
            InputKey::TurnRight,
            InputKey::Fire,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: InputKey = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::KeyDown {
                key: InputKey::Forward,
            },
            PlayerCommand::KeyUp {
                key: InputKey::Fire,
            },
            PlayerCommand::StartGame,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::EngineStarted,
            AudioEvent::EngineStopped,
            AudioEvent::ShotFired,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify Alert round-trips through serde.
    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Critical,
            message: "Game Over!".to_string(),
            tick: 1000,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 0.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.range_sq_to(&b) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_facing_direction() {
        // Yaw 0: facing +z
        let f = facing_direction(0.0);
        assert!(f.x.abs() < 1e-10);
        assert!((f.z - 1.0).abs() < 1e-10);

        // Yaw PI/2: facing +x
        let f = facing_direction(std::f64::consts::FRAC_PI_2);
        assert!((f.x - 1.0).abs() < 1e-10);
        assert!(f.z.abs() < 1e-10);

        // Always horizontal and unit length
        let f = facing_direction(1.234);
        assert!(f.y.abs() < 1e-10);
        assert!((f.length() - 1.0).abs() < 1e-10);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(0.3, 0.0, 0.4);
        assert!((v.speed() - 0.5).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Verify held-key bookkeeping.
    #[test]
    fn test_input_state_transitions() {
        let mut input = InputState::default();
        assert!(!input.any_held());

        input.press(InputKey::Forward);
        assert!(input.forward);
        assert!(input.any_held());

        input.press(InputKey::TurnLeft);
        input.release(InputKey::Forward);
        assert!(!input.forward);
        assert!(input.any_held(), "Turn keys also count as movement");

        input.release(InputKey::TurnLeft);
        assert!(!input.any_held());

        // Fire is edge-triggered and never part of the held set.
        input.press(InputKey::Fire);
        assert!(!input.any_held());
    }

    #[test]
    fn test_constants_sane() {
        assert!(PLAYER_PROJECTILE_SPEED > ENEMY_PROJECTILE_SPEED);
        assert!(PLAYER_SPEED > ENEMY_SEEK_SPEED);
        assert!(HIT_RADIUS <= PROJECTILE_DESPAWN_RADIUS);
        assert_eq!(PLAYER_MAX_HEALTH, 5);
    }
}
