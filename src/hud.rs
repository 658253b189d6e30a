//! Per-frame values handed to the renderer
//!
//! Everything here is derived from the round state; nothing flows back.

use glam::{Vec3, Vec4};

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    /// Score overlay line
    pub score_text: String,
    /// Directional light energy
    pub light_energy: Vec3,
    /// Framebuffer clear color
    pub clear_color: Vec4,
    /// Camera aspect ratio for this drawable
    pub aspect: f32,
}

impl FrameView {
    pub fn new(score: f32, brightness: f32, aspect: f32) -> Self {
        Self {
            score_text: score_text(score),
            light_energy: light_energy(brightness),
            clear_color: clear_color(brightness),
            aspect,
        }
    }
}

pub fn score_text(score: f32) -> String {
    format!("Score: {score:.6}")
}

/// Slightly warm white light scaled by brightness
pub fn light_energy(brightness: f32) -> Vec3 {
    Vec3::new(1.0, 1.0, 0.95) * brightness
}

/// Mid-grey background scaled by brightness (alpha stays opaque)
pub fn clear_color(brightness: f32) -> Vec4 {
    Vec4::new(0.5 * brightness, 0.5 * brightness, 0.5 * brightness, 1.0)
}

/// Aspect ratio of a drawable, guarding against a zero-height surface
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0.0), "Score: 0.000000");
        assert_eq!(score_text(12.5), "Score: 12.500000");
    }

    #[test]
    fn test_brightness_scaling() {
        let view = FrameView::new(1.0, 0.5, 16.0 / 9.0);
        assert_eq!(view.light_energy, Vec3::new(0.5, 0.5, 0.475));
        assert_eq!(view.clear_color, Vec4::new(0.25, 0.25, 0.25, 1.0));

        let dark = FrameView::new(1.0, 0.0, 1.0);
        assert_eq!(dark.light_energy, Vec3::ZERO);
        assert_eq!(dark.clear_color.w, 1.0);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio(1280, 720), 1280.0 / 720.0);
        assert_eq!(aspect_ratio(640, 0), 640.0);
    }
}
