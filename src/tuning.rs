//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. Missing fields
//! fall back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship_speed: f32,
    pub asteroid_speed: f32,
    pub arena_half_x: f32,
    pub arena_half_z: f32,
    pub hit_radius: f32,
    pub spawn_y: f32,
    pub field_exit_y: f32,
    /// Stagger delays for asteroid 1 and asteroid 2
    pub stagger: [f32; 2],
    pub brightness_decay: f32,
    pub brightness_floor: f32,
    pub asteroid_volume: f32,
    pub asteroid_sound_radius: f32,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            asteroid_speed: ASTEROID_SPEED,
            arena_half_x: ARENA_HALF_X,
            arena_half_z: ARENA_HALF_Z,
            hit_radius: HIT_RADIUS,
            spawn_y: SPAWN_Y,
            field_exit_y: FIELD_EXIT_Y,
            stagger: [STAGGER_1, STAGGER_2],
            brightness_decay: BRIGHTNESS_DECAY,
            brightness_floor: BRIGHTNESS_FLOOR,
            asteroid_volume: ASTEROID_VOLUME,
            asteroid_sound_radius: ASTEROID_SOUND_RADIUS,
            seed: None,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning (seed: {:?})", tuning.seed);
        Ok(tuning)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("ship_speed", self.ship_speed),
            ("asteroid_speed", self.asteroid_speed),
            ("arena_half_x", self.arena_half_x),
            ("arena_half_z", self.arena_half_z),
            ("hit_radius", self.hit_radius),
            ("stagger[0]", self.stagger[0]),
            ("stagger[1]", self.stagger[1]),
            ("brightness_decay", self.brightness_decay),
            ("brightness_floor", self.brightness_floor),
            ("asteroid_volume", self.asteroid_volume),
            ("asteroid_sound_radius", self.asteroid_sound_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        // Destinations lie on y = 0; a spawn point there could coincide with one
        if !self.spawn_y.is_finite() || self.spawn_y == 0.0 {
            return Err(TuningError::Invalid(format!(
                "spawn_y must be finite and off the destination plane, got {}",
                self.spawn_y
            )));
        }
        if !self.field_exit_y.is_finite() || self.field_exit_y <= self.spawn_y {
            return Err(TuningError::Invalid(format!(
                "field_exit_y ({}) must lie beyond spawn_y ({})",
                self.field_exit_y, self.spawn_y
            )));
        }
        if self.brightness_decay > 1.0 {
            return Err(TuningError::Invalid(format!(
                "brightness_decay must not exceed 1.0, got {}",
                self.brightness_decay
            )));
        }
        Ok(())
    }
}
