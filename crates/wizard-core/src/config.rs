//! Engine configuration.
//!
//! Every field has a default taken from `constants`, so a JSON override only
//! needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Seconds between enemy projectile spawns.
    pub spawn_interval_secs: f64,
    /// Seconds a fired spell lives before it is removed.
    pub spell_lifespan_secs: f64,
    /// Seconds an enemy projectile lives before it is removed.
    pub enemy_lifespan_secs: f64,
    /// Impulse multiplier for released spells.
    pub spell_strength: f32,
    /// Impulse multiplier for enemy projectiles.
    pub enemy_strength: f32,
    /// Inclusive spawn distance range in whole meters.
    pub spawn_distance_min: u32,
    pub spawn_distance_max: u32,
    /// Seconds the release animation blocks a new cast.
    pub fire_animation_secs: f64,
    /// Integrate velocities in the engine. Hosts with their own physics turn this off.
    pub kinematics: bool,
    /// Award a point for every practice target destroyed.
    pub score_target_hits: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spell_lifespan_secs: SPELL_LIFESPAN_SECS,
            enemy_lifespan_secs: ENEMY_LIFESPAN_SECS,
            spell_strength: SPELL_FIRE_STRENGTH,
            enemy_strength: ENEMY_FIRE_STRENGTH,
            spawn_distance_min: ENEMY_SPAWN_DISTANCE_MIN,
            spawn_distance_max: ENEMY_SPAWN_DISTANCE_MAX,
            fire_animation_secs: FIRE_ANIMATION_SECS,
            kinematics: true,
            score_target_hits: false,
        }
    }
}

impl SimConfig {
    /// Parse a JSON override on top of the defaults and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings of the earliest builds: two-second spells, target scoring on.
    pub fn legacy() -> Self {
        Self {
            spell_lifespan_secs: LEGACY_SPELL_LIFESPAN_SECS,
            score_target_hits: true,
            ..Self::default()
        }
    }

    /// Reject values that would stall the scheduler or invert ranges.
    pub fn validate(&self) -> Result<(), SimError> {
        let durations = [
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("spell_lifespan_secs", self.spell_lifespan_secs),
            ("enemy_lifespan_secs", self.enemy_lifespan_secs),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.fire_animation_secs.is_finite() || self.fire_animation_secs < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "fire_animation_secs must be non-negative, got {}",
                self.fire_animation_secs
            )));
        }
        if self.spawn_distance_min > self.spawn_distance_max {
            return Err(SimError::InvalidConfig(format!(
                "spawn distance range {}..={} is inverted",
                self.spawn_distance_min, self.spawn_distance_max
            )));
        }
        Ok(())
    }
}
