use glam::Vec3;

use super::camera::{ease_f32, ARRIVAL_EPSILON, EASE_FACTOR};
use crate::math::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Light arriving from `position` towards the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector from a lit surface towards the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    /// Zero means no cutoff
    pub range: f32,
    pub position: Vec3,
}

impl PointLight {
    /// Smooth range falloff; 1 at the light, 0 at `range` and beyond
    pub fn attenuation(&self, distance: f32) -> f32 {
        if self.range <= 0.0 {
            return 1.0;
        }
        let ratio = (distance / self.range).clamp(0.0, 1.0);
        let window = 1.0 - ratio * ratio * ratio * ratio;
        window * window
    }
}

/// The three scene lights; the point light is the section accent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLights {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub accent: PointLight,
}

impl SceneLights {
    pub fn portfolio() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::WHITE,
                intensity: 0.5,
            },
            directional: DirectionalLight {
                color: Rgb::WHITE,
                intensity: 1.0,
                position: Vec3::new(5.0, 5.0, 5.0),
            },
            accent: PointLight {
                color: Rgb::from_hex(0x3b82f6),
                intensity: 1.0,
                range: 100.0,
                position: Vec3::new(-5.0, 5.0, 5.0),
            },
        }
    }

    /// One easing step of the accent light. Returns true once it has arrived.
    pub fn ease_accent(&mut self, color: Rgb, intensity: f32) -> bool {
        let color_done = if self.accent.color.distance(color) < ARRIVAL_EPSILON {
            self.accent.color = color;
            true
        } else {
            self.accent.color = self.accent.color.lerp(color, EASE_FACTOR);
            false
        };
        let (next_intensity, intensity_done) = ease_f32(self.accent.intensity, intensity);
        self.accent.intensity = next_intensity;
        color_done && intensity_done
    }
}

impl Default for SceneLights {
    fn default() -> Self {
        Self::portfolio()
    }
}
