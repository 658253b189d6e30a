//! Audio port
//!
//! The game core never mixes audio itself. It asks an [`AudioPort`] to start a
//! looping positional sample when an asteroid spawns and keeps the returned
//! handle alive on the asteroid until the next spawn replaces it.

use glam::Vec3;

/// Samples the core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Rumble loop attached to each asteroid
    Asteroid,
}

/// A sound that is currently playing. Dropping it lets the backend stop it.
pub trait PlayingSound: std::fmt::Debug {}

/// Opaque handle to a playing sound
pub type SoundHandle = Box<dyn PlayingSound>;

/// Backend the core plays sounds through
pub trait AudioPort {
    /// Start a looping sample at a world position, audible within `radius`
    fn loop_positional(
        &mut self,
        sample: Sample,
        volume: f32,
        position: Vec3,
        radius: f32,
    ) -> SoundHandle;

    /// Move the listener. `right` orients stereo panning.
    fn set_listener(&mut self, position: Vec3, right: Vec3, ramp: f32);
}

/// Silent backend for headless runs
#[derive(Debug, Default)]
pub struct NullAudio;

#[derive(Debug)]
struct SilentSound;

impl PlayingSound for SilentSound {}

impl AudioPort for NullAudio {
    fn loop_positional(
        &mut self,
        sample: Sample,
        volume: f32,
        position: Vec3,
        radius: f32,
    ) -> SoundHandle {
        log::debug!(
            "loop {:?} at {:?} (volume {}, radius {})",
            sample,
            position,
            volume,
            radius
        );
        Box::new(SilentSound)
    }

    fn set_listener(&mut self, _position: Vec3, _right: Vec3, _ramp: f32) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Counters shared between a [`RecordingAudio`] and its handles
    #[derive(Debug, Default)]
    pub struct AudioLog {
        pub loops_started: usize,
        pub loops_dropped: usize,
        pub last_loop: Option<(Sample, f32, Vec3, f32)>,
        pub listener: Option<(Vec3, Vec3)>,
        pub listener_updates: usize,
    }

    #[derive(Debug)]
    struct RecordedSound {
        log: Rc<RefCell<AudioLog>>,
    }

    impl PlayingSound for RecordedSound {}

    impl Drop for RecordedSound {
        fn drop(&mut self) {
            self.log.borrow_mut().loops_dropped += 1;
        }
    }

    /// Audio backend that records every request
    #[derive(Debug, Default, Clone)]
    pub struct RecordingAudio {
        pub log: Rc<RefCell<AudioLog>>,
    }

    impl AudioPort for RecordingAudio {
        fn loop_positional(
            &mut self,
            sample: Sample,
            volume: f32,
            position: Vec3,
            radius: f32,
        ) -> SoundHandle {
            let mut log = self.log.borrow_mut();
            log.loops_started += 1;
            log.last_loop = Some((sample, volume, position, radius));
            Box::new(RecordedSound {
                log: Rc::clone(&self.log),
            })
        }

        fn set_listener(&mut self, position: Vec3, right: Vec3, _ramp: f32) {
            let mut log = self.log.borrow_mut();
            log.listener = Some((position, right));
            log.listener_updates += 1;
        }
    }
}
