//! Asteroid spawning
//!
//! Two mechanisms bring an asteroid (back) into play:
//! - one-shot stagger timers, which delay the first appearance of asteroids 1 and 2
//! - field exit: an asteroid that flies past the camera is relaunched at once

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Hazard, HazardId};
use crate::audio::{AudioPort, Sample};
use crate::tuning::Tuning;

/// Countdown until an asteroid's first appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    pub hazard: HazardId,
    /// Seconds remaining
    pub remaining: f32,
}

/// Spawn timers plus the generator used to pick destinations
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    rng: Pcg32,
    pending: Vec<SpawnTimer>,
}

impl SpawnScheduler {
    pub fn new(rng: Pcg32) -> Self {
        Self {
            rng,
            pending: Vec::new(),
        }
    }

    /// Replace all pending timers
    pub fn arm(&mut self, timers: &[(HazardId, f32)]) {
        self.pending = timers
            .iter()
            .map(|&(hazard, remaining)| SpawnTimer { hazard, remaining })
            .collect();
    }

    /// Timers that have not fired yet
    pub fn pending(&self) -> &[SpawnTimer] {
        &self.pending
    }

    /// Count down timers and collect every asteroid due for a launch
    ///
    /// A timer fires once when it reaches zero and is then retired. Asteroids
    /// already past the far boundary are due as well.
    pub fn tick(&mut self, elapsed: f32, hazards: &[Hazard], field_exit_y: f32) -> Vec<HazardId> {
        let mut due = Vec::new();
        self.pending.retain_mut(|timer| {
            timer.remaining -= elapsed;
            if timer.remaining <= 0.0 {
                due.push(timer.hazard);
                false
            } else {
                true
            }
        });

        for id in Self::exited(hazards, field_exit_y) {
            if !due.contains(&id) {
                due.push(id);
            }
        }
        due.sort_unstable();
        due
    }

    /// Asteroids that have flown past the far boundary
    pub fn exited(hazards: &[Hazard], field_exit_y: f32) -> Vec<HazardId> {
        hazards
            .iter()
            .filter(|h| h.position.y > field_exit_y)
            .map(|h| h.id)
            .collect()
    }

    /// Pick a destination uniformly inside the arena rectangle (y = 0)
    pub fn pick_destination(&mut self, tuning: &Tuning) -> Vec3 {
        let x = self
            .rng
            .random_range(-tuning.arena_half_x..=tuning.arena_half_x);
        let z = self
            .rng
            .random_range(-tuning.arena_half_z..=tuning.arena_half_z);
        Vec3::new(x, 0.0, z)
    }

    /// Put an asteroid at the spawn point and aim it at a random destination
    pub fn launch(&mut self, hazard: &mut Hazard, tuning: &Tuning, audio: &mut dyn AudioPort) {
        hazard.position = Vec3::new(0.0, tuning.spawn_y, 0.0);
        let dest = self.pick_destination(tuning);
        // spawn_y != 0 (validated), so dest - position is never zero
        hazard.velocity = (dest - hazard.position).normalize() * tuning.asteroid_speed;
        hazard.sound = Some(audio.loop_positional(
            Sample::Asteroid,
            tuning.asteroid_volume,
            hazard.position,
            tuning.asteroid_sound_radius,
        ));
        log::debug!(
            "Asteroid {} launched toward ({:.2}, {:.2})",
            hazard.id,
            dest.x,
            dest.z
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::audio::NullAudio;
    use crate::audio::testing::RecordingAudio;

    fn scheduler(seed: u64) -> SpawnScheduler {
        SpawnScheduler::new(Pcg32::seed_from_u64(seed))
    }

    fn hazards() -> [Hazard; 3] {
        [Hazard::new(0), Hazard::new(1), Hazard::new(2)]
    }

    #[test]
    fn test_timer_fires_once() {
        let mut sched = scheduler(1);
        sched.arm(&[(1, 2.5), (2, 5.0)]);
        let hz = hazards();

        assert!(sched.tick(2.0, &hz, 20.0).is_empty());
        assert_eq!(sched.tick(0.5, &hz, 20.0), vec![1]);
        assert_eq!(sched.pending().len(), 1);
        assert!(sched.tick(1.0, &hz, 20.0).is_empty());
        assert_eq!(sched.tick(1.5, &hz, 20.0), vec![2]);
        assert!(sched.pending().is_empty());
        assert!(sched.tick(10.0, &hz, 20.0).is_empty());
    }

    #[test]
    fn test_exited_hazard_is_due() {
        let mut sched = scheduler(1);
        let mut hz = hazards();
        hz[2].position = Vec3::new(0.0, 20.5, 0.0);
        assert_eq!(sched.tick(0.016, &hz, 20.0), vec![2]);

        // Exactly on the boundary is still in the field
        hz[2].position.y = 20.0;
        assert!(SpawnScheduler::exited(&hz, 20.0).is_empty());
    }

    #[test]
    fn test_launch_velocity_and_destination() {
        let tuning = Tuning::default();
        let mut sched = scheduler(42);
        let mut audio = RecordingAudio::default();
        let mut hazard = Hazard::new(0);

        for _ in 0..50 {
            sched.launch(&mut hazard, &tuning, &mut audio);
            assert_eq!(hazard.position, Vec3::new(0.0, -60.0, 0.0));
            assert!((hazard.velocity.length() - tuning.asteroid_speed).abs() < 1e-4);

            // Follow the velocity back to the y = 0 plane
            let t = -hazard.position.y / hazard.velocity.y;
            let dest = hazard.position + hazard.velocity * t;
            assert!(dest.x.abs() <= 7.0 + 1e-3);
            assert!(dest.z.abs() <= 3.5 + 1e-3);
        }

        let log = audio.log.borrow();
        assert_eq!(log.loops_started, 50);
        // Every relaunch dropped the previous loop
        assert_eq!(log.loops_dropped, 49);
        let (sample, volume, position, radius) = log.last_loop.unwrap();
        assert_eq!(sample, Sample::Asteroid);
        assert_eq!(volume, 1.0);
        assert_eq!(position, Vec3::new(0.0, -60.0, 0.0));
        assert_eq!(radius, 20.0);
    }

    #[test]
    fn test_same_seed_same_destinations() {
        let tuning = Tuning::default();
        let mut a = scheduler(7);
        let mut b = scheduler(7);
        for _ in 0..20 {
            assert_eq!(a.pick_destination(&tuning), b.pick_destination(&tuning));
        }
    }

    #[test]
    fn test_launch_attaches_sound() {
        let tuning = Tuning::default();
        let mut sched = scheduler(3);
        let mut hazard = Hazard::new(1);
        assert!(hazard.sound.is_none());
        sched.launch(&mut hazard, &tuning, &mut NullAudio);
        assert!(hazard.sound.is_some());
    }
}
