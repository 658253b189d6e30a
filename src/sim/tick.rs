//! Per-frame simulation tick
//!
//! Order within a tick is fixed: spawning, then motion, then field-exit
//! respawn, then collision, then scoring. Brightness decays every tick, even
//! after the round has ended.

use super::collision;
use super::motion::{move_hazards, move_player};
use super::spawn::SpawnScheduler;
use super::state::{HazardId, RoundState};
use crate::audio::AudioPort;
use crate::input::InputFrame;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Asteroids (re)launched this tick, in launch order
    pub spawned: Vec<HazardId>,
    /// Asteroid that ended the round, if any
    pub hit: Option<HazardId>,
}

/// Advance the round by `elapsed` seconds
pub fn tick(
    state: &mut RoundState,
    input: &InputFrame,
    elapsed: f32,
    audio: &mut dyn AudioPort,
) -> TickReport {
    let mut report = TickReport::default();

    state.decay_brightness();

    if !state.is_running() {
        return report;
    }

    let due = state
        .scheduler
        .tick(elapsed, &state.hazards, state.tuning.field_exit_y);
    for id in due {
        launch(state, id, audio);
        report.spawned.push(id);
    }

    move_player(&mut state.player, input, elapsed, &state.tuning);
    move_hazards(&mut state.hazards, elapsed);

    for id in SpawnScheduler::exited(&state.hazards, state.tuning.field_exit_y) {
        launch(state, id, audio);
        report.spawned.push(id);
    }

    report.hit = collision::first_hit(&state.player, &state.hazards, state.tuning.hit_radius);
    if report.hit.is_some() {
        state.end();
        return report;
    }

    state.score += elapsed;
    report
}

fn launch(state: &mut RoundState, id: HazardId, audio: &mut dyn AudioPort) {
    let RoundState {
        scheduler,
        hazards,
        tuning,
        ..
    } = state;
    scheduler.launch(&mut hazards[id], tuning, audio);
}
