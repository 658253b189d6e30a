//! Player/asteroid collision
//!
//! A plain distance test: any asteroid closer than the hit radius ends the round.

use glam::Vec3;

use super::state::{Hazard, HazardId, Player};

/// First asteroid within `hit_radius` of the player, if any
pub fn first_hit(player: &Player, hazards: &[Hazard], hit_radius: f32) -> Option<HazardId> {
    hazards
        .iter()
        .find(|h| within(player.position, h.position, hit_radius))
        .map(|h| h.id)
}

/// Whether any asteroid hits the player
pub fn check(player: &Player, hazards: &[Hazard], hit_radius: f32) -> bool {
    first_hit(player, hazards, hit_radius).is_some()
}

#[inline]
fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}
