//! Motion integration
//!
//! The craft moves at a fixed speed along each unambiguous input axis and is
//! hard-clamped to the arena. Asteroids fly in straight lines, unclamped.

use super::state::{Hazard, Player};
use crate::input::InputFrame;
use crate::tuning::Tuning;

/// Move the player by one tick of input, then clamp to the arena
pub fn move_player(player: &mut Player, input: &InputFrame, elapsed: f32, tuning: &Tuning) {
    let step = tuning.ship_speed * elapsed;
    let x = player.position.x + input.x_axis() * step;
    let z = player.position.z + input.z_axis() * step;

    player.position.x = x.clamp(-tuning.arena_half_x, tuning.arena_half_x);
    player.position.y = 0.0;
    player.position.z = z.clamp(-tuning.arena_half_z, tuning.arena_half_z);
}

/// Ballistic asteroid motion
pub fn move_hazards(hazards: &mut [Hazard], elapsed: f32) {
    for hazard in hazards {
        hazard.position += elapsed * hazard.velocity;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use proptest::prelude::*;

    use super::*;
    use crate::input::{InputTracker, Key, KeyEvent};

    fn frame(keys: &[Key]) -> InputFrame {
        let mut tracker = InputTracker::new();
        for &key in keys {
            tracker.on_key(KeyEvent::down(key));
        }
        tracker.take_frame()
    }

    #[test]
    fn test_player_moves_along_axes() {
        let tuning = Tuning::default();
        let mut player = Player::default();

        move_player(&mut player, &frame(&[Key::A, Key::W]), 0.5, &tuning);
        assert!((player.position - Vec3::new(0.5, 0.0, 0.5)).length() < 1e-6);

        move_player(&mut player, &frame(&[Key::D, Key::S]), 1.0, &tuning);
        assert!((player.position - Vec3::new(-0.5, 0.0, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_hold_position() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        move_player(&mut player, &frame(&[Key::A, Key::D, Key::W, Key::S]), 3.0, &tuning);
        assert_eq!(player.position, Vec3::ZERO);
    }

    #[test]
    fn test_clamp_is_hard_stop() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        move_player(&mut player, &frame(&[Key::A, Key::W]), 100.0, &tuning);
        assert_eq!(player.position, Vec3::new(7.0, 0.0, 3.5));

        // No bounce: reversing moves away from the wall by exactly one step
        move_player(&mut player, &frame(&[Key::D]), 1.0, &tuning);
        assert_eq!(player.position.x, 6.0);
    }

    #[test]
    fn test_hazard_ballistic_motion() {
        let mut hazards = [Hazard::new(0)];
        hazards[0].position = Vec3::new(0.0, -60.0, 0.0);
        hazards[0].velocity = Vec3::new(0.0, 10.0, 0.0);
        move_hazards(&mut hazards, 0.25);
        assert_eq!(hazards[0].position, Vec3::new(0.0, -57.5, 0.0));
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_arena(
            start_x in -7.0f32..=7.0,
            start_z in -3.5f32..=3.5,
            elapsed in 0.0f32..1000.0,
            keys in proptest::collection::vec(
                prop_oneof![Just(Key::A), Just(Key::D), Just(Key::W), Just(Key::S)],
                0..4,
            ),
        ) {
            let tuning = Tuning::default();
            let mut player = Player::default();
            player.position = Vec3::new(start_x, 0.0, start_z);
            move_player(&mut player, &frame(&keys), elapsed, &tuning);
            prop_assert!(player.position.x >= -7.0 && player.position.x <= 7.0);
            prop_assert!(player.position.z >= -3.5 && player.position.z <= 3.5);
            prop_assert_eq!(player.position.y, 0.0);
        }
    }
}
