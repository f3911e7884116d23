//! Tank arena host application.
//!
//! This crate runs the headless simulation engine on its own thread and
//! exposes a command channel plus a shared snapshot slot for a frontend
//! (or the bundled demo driver) to consume.

pub mod game_loop;
pub mod state;

pub use arena_core as core;
