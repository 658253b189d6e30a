//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by asteroid slot)
//! - No rendering or platform dependencies (audio goes through `AudioPort`)

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{SpawnScheduler, SpawnTimer};
pub use state::{
    HAZARD_COUNT, Hazard, HazardId, PARKED_POSITION, PLAYER_ROTATION, Player, RoundPhase,
    RoundState,
};
pub use tick::{TickReport, tick};
