//! Simulation constants and tuning parameters.
//!
//! Movement constants are expressed in world units per tick: the
//! integration timestep is one tick, matching the fixed-rate loop.

use glam::DVec3;

/// Simulation tick rate (Hz) — one tick per display refresh.
pub const TICK_RATE: u32 = 60;

// --- Player tank ---

/// Hull speed while a drive key is held (units/tick).
pub const PLAYER_SPEED: f64 = 0.1;

/// Yaw change while a turn key is held (radians/tick).
pub const TURN_RATE: f64 = 0.03;

/// Player health at the start of a run, and the pickup cap.
pub const PLAYER_MAX_HEALTH: u32 = 5;

// --- Projectiles ---

/// Player-fired projectile speed (units/tick).
pub const PLAYER_PROJECTILE_SPEED: f64 = 0.5;

/// Enemy-fired projectile speed (units/tick).
pub const ENEMY_PROJECTILE_SPEED: f64 = 0.3;

/// Distance from tank center to barrel tip along the facing direction.
pub const BARREL_TIP_OFFSET: f64 = 2.5;

/// Barrel height above the tank base (projectile spawn height).
pub const BARREL_HEIGHT: f64 = 0.85;

/// Projectiles farther than this from the player despawn.
/// Measured from the player's current position, not the firing tank.
pub const PROJECTILE_DESPAWN_RADIUS: f64 = 50.0;

// --- Collision ---

/// Projectile-vs-tank proximity threshold (units).
pub const HIT_RADIUS: f64 = 1.0;

/// Health-pack collection radius around the player (units).
pub const PICKUP_RADIUS: f64 = 1.0;

// --- Enemy tanks ---

/// Seek speed toward the player (units/tick).
pub const ENEMY_SEEK_SPEED: f64 = 0.05;

/// Half-width of the uniform horizontal steering jitter (units/tick).
pub const ENEMY_JITTER: f64 = 0.01;

/// Wall-clock interval between enemy volleys (seconds).
pub const ENEMY_FIRE_INTERVAL_SECS: f64 = 2.0;

/// Initial enemy spawn position.
pub const ENEMY_START: DVec3 = DVec3::new(10.0, 0.0, 10.0);

/// Ground level; enemy hulls are clamped here every tick.
pub const GROUND_LEVEL: f64 = 0.0;

// --- Health pickups ---

/// Wall-clock interval between health-pack spawns (seconds).
pub const PICKUP_SPAWN_INTERVAL_SECS: f64 = 5.0;

/// Packs spawn uniformly within this half-extent of the origin on x and z.
pub const PICKUP_FIELD_HALF_EXTENT: f64 = 25.0;

/// Fixed spawn height for health packs.
pub const PICKUP_HEIGHT: f64 = 0.25;

// --- Camera ---

/// Chase-camera offset in the player's local frame, rotated by its yaw.
pub const CAMERA_OFFSET: DVec3 = DVec3::new(0.0, 5.0, -10.0);
