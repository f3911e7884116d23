//! Simulation engine for TANK ARENA.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for a presentation layer.
//! Completely headless, enabling deterministic testing.

pub mod engine;
pub mod schedule;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::SimulationEngine;
