//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no windowing or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::PlayerCommand;
use arena_core::constants::{ENEMY_FIRE_INTERVAL_SECS, PICKUP_SPAWN_INTERVAL_SECS};
use arena_core::enums::{AlertLevel, GamePhase, InputKey};
use arena_core::events::{Alert, AudioEvent};
use arena_core::input::InputState;
use arena_core::state::GameStateSnapshot;
use arena_core::types::SimTime;

use crate::schedule::IntervalTimer;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
    /// Whether the engine-audio loop is currently playing.
    engine_running: bool,
    enemy_fire_timer: IntervalTimer,
    pickup_spawn_timer: IntervalTimer,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            alerts: Vec::new(),
            engine_running: false,
            enemy_fire_timer: IntervalTimer::new(ENEMY_FIRE_INTERVAL_SECS),
            pickup_spawn_timer: IntervalTimer::new(PICKUP_SPAWN_INTERVAL_SECS),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let alerts = std::mem::take(&mut self.alerts);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, alerts, audio_events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::Defeat) {
                    self.world.clear();
                    world_setup::setup_arena(&mut self.world);
                    self.time = SimTime::default();
                    self.input.clear();
                    self.engine_running = false;
                    self.enemy_fire_timer.reset();
                    self.pickup_spawn_timer.reset();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            // Input is frozen once the run has ended.
            PlayerCommand::KeyDown { key } if self.phase != GamePhase::Defeat => match key {
                InputKey::Fire => {
                    if self.phase == GamePhase::Active {
                        systems::fire_control::fire_player_projectile(
                            &mut self.world,
                            &mut self.audio_events,
                        );
                    }
                }
                _ => self.input.press(key),
            },
            PlayerCommand::KeyUp { key } if self.phase != GamePhase::Defeat => {
                self.input.release(key);
            }
            PlayerCommand::KeyDown { .. } | PlayerCommand::KeyUp { .. } => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // Time advances after the systems run; alerts raised here are
        // stamped with the tick the enclosing snapshot will report.
        let alert_tick = self.time.tick + 1;
        // 1. Player movement + engine audio edges
        systems::player_control::run(
            &mut self.world,
            &self.input,
            &mut self.engine_running,
            &mut self.audio_events,
        );
        // 2. Scheduled enemy volley (wall-clock interval)
        if self.enemy_fire_timer.poll(self.time.elapsed_secs) {
            systems::fire_control::run_enemy_volley(&mut self.world);
        }
        // 3. Scheduled pickup spawn (wall-clock interval)
        if self.pickup_spawn_timer.poll(self.time.elapsed_secs) {
            systems::pickup::spawn_random(&mut self.world, &mut self.rng);
        }
        // 4. Enemy steering
        systems::enemy_ai::run(&mut self.world, &mut self.rng);
        // 5. Movement integration (projectiles + enemies)
        systems::movement::run(&mut self.world);
        // 6. Collision resolution
        let defeated = systems::collision::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.alerts,
            alert_tick,
        );
        if defeated {
            self.phase = GamePhase::Defeat;
            self.alerts.push(Alert {
                level: AlertLevel::Critical,
                message: "Game Over!".to_string(),
                tick: alert_tick,
            });
        }
        // 7. Pickup collection
        systems::pickup::collect(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.alerts,
            alert_tick,
        );
        // 8. Projectile expiry
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Spawn an extra enemy tank (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_tank(&mut self, position: arena_core::types::Position) -> hecs::Entity {
        world_setup::spawn_enemy_tank(&mut self.world, position)
    }

    /// Spawn a projectile directly (for testing).
    #[cfg(test)]
    pub fn spawn_projectile(
        &mut self,
        position: arena_core::types::Position,
        velocity: arena_core::types::Velocity,
        source: arena_core::enums::ProjectileSource,
    ) -> hecs::Entity {
        world_setup::spawn_projectile(&mut self.world, position, velocity, source)
    }

    /// Spawn a health pack at a known position (for testing).
    #[cfg(test)]
    pub fn spawn_health_pack(&mut self, position: arena_core::types::Position) -> hecs::Entity {
        world_setup::spawn_health_pack(&mut self.world, position)
    }

    /// Overwrite the player's health (for testing).
    #[cfg(test)]
    pub fn set_player_health(&mut self, health: u32) {
        use arena_core::components::{Health, PlayerTank};
        for (_entity, (_player, h)) in self.world.query_mut::<(&PlayerTank, &mut Health)>() {
            h.current = health;
        }
    }

    /// Read the player's health (for testing).
    #[cfg(test)]
    pub fn player_health(&self) -> Option<u32> {
        use arena_core::components::{Health, PlayerTank};
        self.world
            .query::<(&PlayerTank, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, h))| h.current)
    }
}
