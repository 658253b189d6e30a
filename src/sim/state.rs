//! Round state and entity types
//!
//! Entities are created once and never destroyed. Spawning rewrites an
//! existing asteroid in place, and a restart resets this state in place.

use glam::{Quat, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::SpawnScheduler;
use crate::audio::{AudioPort, SoundHandle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Number of asteroids in play
pub const HAZARD_COUNT: usize = 3;

/// Off-field marker for asteroids waiting on their stagger timer
pub const PARKED_POSITION: Vec3 = Vec3::new(PARKED_X, 0.0, PARKED_Z);

/// Miner orientation: quarter turn about +x so the craft faces the camera
pub const PLAYER_ROTATION: Quat = Quat::from_xyzw(
    std::f32::consts::FRAC_1_SQRT_2,
    0.0,
    0.0,
    std::f32::consts::FRAC_1_SQRT_2,
);

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Player is alive and scoring
    Running,
    /// Player was hit; waiting for restart
    Ended,
}

/// Asteroid slot index (0, 1 or 2)
pub type HazardId = usize;

/// The player's mining craft
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Position on the x,z plane (y is always 0)
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: PLAYER_ROTATION,
        }
    }
}

impl Player {
    /// Unit right vector of the craft's local frame
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

/// An asteroid
#[derive(Debug)]
pub struct Hazard {
    pub id: HazardId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Looping rumble; replaced (and the old one dropped) on every spawn
    pub sound: Option<SoundHandle>,
}

impl Hazard {
    pub fn new(id: HazardId) -> Self {
        Self {
            id,
            position: PARKED_POSITION,
            velocity: Vec3::ZERO,
            sound: None,
        }
    }

    /// Move off-field and stop
    pub fn park(&mut self) {
        self.position = PARKED_POSITION;
        self.velocity = Vec3::ZERO;
    }

    /// Whether the asteroid is waiting off-field
    #[cfg(test)]
    pub(crate) fn is_parked(&self) -> bool {
        self.position == PARKED_POSITION && self.velocity == Vec3::ZERO
    }
}

/// Complete round state
#[derive(Debug)]
pub struct RoundState {
    pub tuning: Tuning,
    pub phase: RoundPhase,
    /// Survival time in seconds
    pub score: f32,
    /// Cosmetic light intensity (1.0 at reset, decays every tick)
    pub brightness: f32,
    pub player: Player,
    pub hazards: [Hazard; HAZARD_COUNT],
    pub scheduler: SpawnScheduler,
}

impl RoundState {
    /// Create a running round with the given seed
    pub fn new(tuning: Tuning, seed: u64, audio: &mut dyn AudioPort) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed), audio)
    }

    /// Create a running round driven by an explicit generator
    ///
    /// `tuning` must already pass [`Tuning::validate`]; `PlayMode` checks it.
    pub fn with_rng(tuning: Tuning, rng: Pcg32, audio: &mut dyn AudioPort) -> Self {
        debug_assert!(tuning.validate().is_ok(), "unvalidated tuning");
        let mut state = Self {
            tuning,
            phase: RoundPhase::Running,
            score: 0.0,
            brightness: 1.0,
            player: Player::default(),
            hazards: [Hazard::new(0), Hazard::new(1), Hazard::new(2)],
            scheduler: SpawnScheduler::new(rng),
        };
        state.reset(audio);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Start a fresh round in place
    ///
    /// Asteroid 0 launches immediately; 1 and 2 wait off-field on their
    /// stagger timers.
    pub fn reset(&mut self, audio: &mut dyn AudioPort) {
        self.brightness = 1.0;
        self.score = 0.0;
        self.player = Player::default();

        self.scheduler.launch(&mut self.hazards[0], &self.tuning, audio);
        self.hazards[1].park();
        self.hazards[2].park();
        self.scheduler
            .arm(&[(1, self.tuning.stagger[0]), (2, self.tuning.stagger[1])]);

        self.phase = RoundPhase::Running;
    }

    /// End the round (collision)
    pub fn end(&mut self) {
        if self.phase == RoundPhase::Running {
            self.phase = RoundPhase::Ended;
            log::info!("Round over - score {:.2}", self.score);
        }
    }

    /// Apply one tick of brightness decay
    pub fn decay_brightness(&mut self) {
        self.brightness *= self.tuning.brightness_decay;
        if self.brightness < self.tuning.brightness_floor {
            self.brightness = 0.0;
        }
    }
}
