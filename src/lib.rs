//! Asteroid Dodge - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, round state)
//! - `input`: Key event tracking with per-frame edge counters
//! - `scene`: Named scene nodes the simulation is bound to
//! - `audio`: Looping positional sound port
//! - `mode`: Host-facing play mode (input, advance, frame view)
//! - `hud`: Read-only presentation values for the renderer
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod hud;
pub mod input;
pub mod mode;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use mode::{Mode, PlayMode};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Player movement speed (arena units per second)
    pub const SHIP_SPEED: f32 = 1.0;
    /// Asteroid flight speed (arena units per second)
    pub const ASTEROID_SPEED: f32 = 10.0;

    /// Arena half extents - the player is clamped to [-X, X] x [-Z, Z]
    pub const ARENA_HALF_X: f32 = 7.0;
    pub const ARENA_HALF_Z: f32 = 3.5;

    /// Distance below which an asteroid hits the player
    pub const HIT_RADIUS: f32 = 1.5;

    /// Asteroids appear at this depth...
    pub const SPAWN_Y: f32 = -60.0;
    /// ...and are respawned once they fly past this one
    pub const FIELD_EXIT_Y: f32 = 20.0;

    /// Where asteroids wait before their first appearance
    pub const PARKED_X: f32 = 1000.0;
    pub const PARKED_Z: f32 = 1000.0;

    /// First-appearance delays for the 2nd and 3rd asteroid (seconds)
    pub const STAGGER_1: f32 = 2.5;
    pub const STAGGER_2: f32 = 5.0;

    /// Per-tick brightness multiplier
    pub const BRIGHTNESS_DECAY: f32 = 0.998;
    /// Brightness snaps to zero below this
    pub const BRIGHTNESS_FLOOR: f32 = 0.1;

    /// Looping asteroid sound
    pub const ASTEROID_VOLUME: f32 = 1.0;
    pub const ASTEROID_SOUND_RADIUS: f32 = 20.0;
    /// Listener pose ramp time (seconds)
    pub const LISTENER_RAMP: f32 = 1.0 / 60.0;

    /// Scene node names
    pub const MINER_NODE: &str = "craft_miner";
    pub const ASTEROID_NODES: [&str; 3] = ["Icosphere0", "Icosphere1", "Icosphere2"];
}
