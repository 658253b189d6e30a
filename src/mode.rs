//! Play mode
//!
//! [`Mode`] is the surface the host loop drives: feed it key events, advance
//! it once per frame, then ask it for a [`FrameView`]. [`PlayMode`] is the
//! asteroid-dodging game behind it.

use glam::{Quat, UVec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioPort;
use crate::consts::LISTENER_RAMP;
use crate::hud::{FrameView, aspect_ratio};
use crate::input::{InputTracker, KeyEvent};
use crate::scene::{Scene, SceneBindings, SetupError};
use crate::sim::{self, HAZARD_COUNT, RoundPhase, RoundState};
use crate::tuning::Tuning;

/// Fixed camera position, above and slightly behind the miner
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 20.0, 3.0);

/// Fixed camera rotation: miner orientation, turned to face back along -y and
/// tilted slightly toward the play field
pub fn camera_rotation() -> Quat {
    sim::PLAYER_ROTATION
        * Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI)
        * Quat::from_axis_angle(Vec3::X, -std::f32::consts::PI * 0.05)
}

/// Read-only view of the round for hosts and overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub score: f32,
    pub brightness: f32,
    pub player: Vec3,
    pub hazards: [Vec3; HAZARD_COUNT],
}

impl RoundSnapshot {
    pub fn running(&self) -> bool {
        self.phase == RoundPhase::Running
    }
}

/// A game mode the host loop can drive
pub trait Mode {
    /// Handle a key event. Returns whether the mode consumed it.
    fn handle_input(&mut self, event: KeyEvent) -> bool;

    /// Advance by `elapsed` seconds
    fn advance(&mut self, elapsed: f32);

    /// Presentation values for a drawable of the given size
    fn frame(&mut self, drawable_size: UVec2) -> FrameView;

    /// Current round state
    fn snapshot(&self) -> RoundSnapshot;
}

/// The asteroid-dodging game
pub struct PlayMode<A: AudioPort> {
    scene: Scene,
    bindings: SceneBindings,
    audio: A,
    input: InputTracker,
    state: RoundState,
}

impl<A: AudioPort> PlayMode<A> {
    /// Bind to the scene and start the first round
    ///
    /// Fails if the tuning is invalid, any required scene node is missing, or
    /// the scene does not have exactly one camera. A fixed `tuning.seed` makes
    /// the run reproducible.
    pub fn new(scene: Scene, audio: A, tuning: Tuning) -> Result<Self, SetupError> {
        let seed = tuning.seed.unwrap_or_else(rand::random);
        Self::with_rng(scene, audio, tuning, Pcg32::seed_from_u64(seed))
    }

    /// Like [`PlayMode::new`] but with an explicit generator
    pub fn with_rng(
        scene: Scene,
        mut audio: A,
        tuning: Tuning,
        rng: Pcg32,
    ) -> Result<Self, SetupError> {
        tuning.validate()?;
        let bindings = SceneBindings::resolve(&scene)?;
        let state = RoundState::with_rng(tuning, rng, &mut audio);
        let mut mode = Self {
            scene,
            bindings,
            audio,
            input: InputTracker::new(),
            state,
        };
        mode.place_camera();
        mode.sync_scene();
        Ok(mode)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Restart the round in place
    pub fn restart(&mut self) {
        self.state.reset(&mut self.audio);
        self.place_camera();
        self.sync_scene();
        log::info!("Round restarted");
    }

    fn place_camera(&mut self) {
        let camera = self.scene.cameras[self.bindings.camera].transform;
        let transform = self.scene.transform_mut(camera);
        transform.position = CAMERA_POSITION;
        transform.rotation = camera_rotation();
    }

    /// Copy simulation positions into the bound scene nodes
    fn sync_scene(&mut self) {
        let miner = self.scene.transform_mut(self.bindings.miner);
        miner.position = self.state.player.position;
        miner.rotation = self.state.player.rotation;

        for (id, hazard) in self.bindings.asteroids.iter().zip(&self.state.hazards) {
            self.scene.transform_mut(*id).position = hazard.position;
        }
    }

    fn update_listener(&mut self) {
        let at = self.scene.transform(self.bindings.miner).position;
        self.audio
            .set_listener(at, self.state.player.right(), LISTENER_RAMP);
    }
}

impl<A: AudioPort> Mode for PlayMode<A> {
    fn handle_input(&mut self, event: KeyEvent) -> bool {
        let consumed = self.input.on_key(event);
        if self.input.take_restart() && !self.state.is_running() {
            self.restart();
        }
        consumed
    }

    fn advance(&mut self, elapsed: f32) {
        let input = self.input.take_frame();
        let report = sim::tick(&mut self.state, &input, elapsed, &mut self.audio);

        if self.state.is_running() || report.hit.is_some() {
            self.sync_scene();
        }
        if self.state.is_running() {
            self.update_listener();
        }
    }

    fn frame(&mut self, drawable_size: UVec2) -> FrameView {
        let aspect = aspect_ratio(drawable_size.x, drawable_size.y);
        self.scene.cameras[self.bindings.camera].aspect = aspect;
        FrameView::new(self.state.score, self.state.brightness, aspect)
    }

    fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.state.phase,
            score: self.state.score,
            brightness: self.state.brightness,
            player: self.state.player.position,
            hazards: [
                self.state.hazards[0].position,
                self.state.hazards[1].position,
                self.state.hazards[2].position,
            ],
        }
    }
}
