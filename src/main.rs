//! Asteroid Dodge entry point
//!
//! Runs the game headless with a scripted pilot: rendering and windowing are
//! provided by a host, so the native binary just drives the play mode at a
//! fixed 60 Hz and logs each round.
//!
//! Usage: `asteroid-dodge [tuning.json] [frames]`

use std::process::ExitCode;

use glam::UVec2;

use asteroid_dodge::audio::NullAudio;
use asteroid_dodge::input::{Key, KeyEvent};
use asteroid_dodge::scene::default_scene;
use asteroid_dodge::{Mode, PlayMode, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 60 * 120;
const DRAWABLE_SIZE: UVec2 = UVec2::new(1280, 720);

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Asteroid Dodge (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{path}: {e} - using default tuning");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut mode = match PlayMode::new(default_scene(), NullAudio, tuning) {
        Ok(mode) => mode,
        Err(e) => {
            log::error!("Failed to set up play mode: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rounds = 1u32;
    let mut best = 0.0f32;
    let mut dodge = Dodge::default();

    for frame in 0..frames {
        let snapshot = mode.snapshot();
        if snapshot.running() {
            for event in dodge.steer(&snapshot) {
                mode.handle_input(event);
            }
        } else {
            best = best.max(snapshot.score);
            rounds += 1;
            for event in dodge.release_all() {
                mode.handle_input(event);
            }
            mode.handle_input(KeyEvent::down(Key::Space));
            mode.handle_input(KeyEvent::up(Key::Space));
        }

        mode.advance(FRAME_DT);
        let view = mode.frame(DRAWABLE_SIZE);
        if frame % 600 == 0 {
            log::debug!("frame {frame}: {}", view.score_text);
        }
    }

    best = best.max(mode.snapshot().score);
    log::info!("Played {rounds} round(s) over {frames} frames, best score {best:.2}");
    ExitCode::SUCCESS
}

/// Scripted pilot: sidestep along x away from the nearest incoming asteroid
#[derive(Debug, Default)]
struct Dodge {
    held: Option<Key>,
}

impl Dodge {
    fn steer(&mut self, snapshot: &asteroid_dodge::mode::RoundSnapshot) -> Vec<KeyEvent> {
        let threat = snapshot
            .hazards
            .iter()
            .filter(|h| h.y < 0.0 && h.y > -15.0)
            .min_by(|a, b| b.y.total_cmp(&a.y));

        // "A" moves toward +x, "D" toward -x
        let want = threat.map(|h| {
            if h.x > snapshot.player.x {
                Key::D
            } else {
                Key::A
            }
        });

        if want == self.held {
            return Vec::new();
        }
        let mut events = self.release_all();
        if let Some(key) = want {
            events.push(KeyEvent::down(key));
            self.held = Some(key);
        }
        events
    }

    fn release_all(&mut self) -> Vec<KeyEvent> {
        self.held.take().map(KeyEvent::up).into_iter().collect()
    }
}
