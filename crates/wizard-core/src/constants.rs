//! Simulation constants and tuning parameters.
//!
//! These are the defaults; `SimConfig` can override the gameplay ones.

use glam::Vec3;

/// Simulation tick rate (Hz), matching the host render loop.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Wand rig ---

/// Wand position relative to the viewer.
pub const WAND_OFFSET: Vec3 = Vec3::new(0.1, -0.2, -0.8);

/// Where the channelled spell glows, relative to the viewer.
pub const SPELL_CHANNEL_OFFSET: Vec3 = Vec3::new(0.01, -0.03, -0.8);

/// Duration of the wand tilt played when a spell is released (seconds).
pub const FIRE_ANIMATION_SECS: f64 = 0.25;

// --- Spells ---

/// Impulse multiplier applied along the view direction on release.
pub const SPELL_FIRE_STRENGTH: f32 = 5.0;

/// Lifespan of a fired spell (seconds).
pub const SPELL_LIFESPAN_SECS: f64 = 1.5;

/// Lifespan used by the earliest builds (seconds).
pub const LEGACY_SPELL_LIFESPAN_SECS: f64 = 2.0;

// --- Enemy projectiles ---

/// Interval between enemy projectile spawns (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Impulse multiplier applied toward the viewer.
pub const ENEMY_FIRE_STRENGTH: f32 = 4.0;

/// Inclusive range of spawn distances in front of the viewer (meters).
pub const ENEMY_SPAWN_DISTANCE_MIN: u32 = 4;
pub const ENEMY_SPAWN_DISTANCE_MAX: u32 = 5;

/// Lifespan of an enemy projectile that was dodged (seconds).
pub const ENEMY_LIFESPAN_SECS: f64 = 2.0;

// --- Effects ---

/// Lifetime of the explosion effect when projectiles meet (seconds).
pub const EXPLOSION_EFFECT_SECS: f64 = 0.5;

/// Lifetime of the colored effect when the player is hit (seconds).
pub const PLAYER_HIT_EFFECT_SECS: f64 = 1.5;

// --- Headless kinematics ---

/// Mass assumed for every fired body when converting impulse to velocity (kg).
pub const PROJECTILE_MASS: f32 = 1.0;

/// Gravity applied to spells in headless mode (m/s²).
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
