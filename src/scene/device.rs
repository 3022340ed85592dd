/// Viewports narrower than this are treated as constrained
pub const DEFAULT_MOBILE_WIDTH: f32 = 768.0;

/// User-agent fragments that identify mobile-class devices
pub const MOBILE_UA_MARKERS: [&str; 9] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
    "Mobile",
];

/// Capability profile chosen once per attach.
///
/// Constrained devices get coarser tessellation, no antialiasing, a lower
/// pixel ratio cap, fewer ray-march steps and slower mesh rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    pub constrained: bool,
    /// Sphere (width, height) segments
    pub sphere_segments: (u32, u32),
    /// Torus (radial, tubular) segments
    pub torus_segments: (u32, u32),
    pub antialias: bool,
    pub max_pixel_ratio: f32,
    pub march_steps: u32,
    /// Per-frame rotation increment of every accent mesh, radians
    pub rotation_step: f32,
}

impl DeviceProfile {
    pub const fn desktop() -> Self {
        Self {
            constrained: false,
            sphere_segments: (32, 32),
            torus_segments: (16, 100),
            antialias: true,
            max_pixel_ratio: 2.0,
            march_steps: 96,
            rotation_step: 0.01,
        }
    }

    pub const fn constrained() -> Self {
        Self {
            constrained: true,
            sphere_segments: (16, 16),
            torus_segments: (8, 50),
            antialias: false,
            max_pixel_ratio: 1.5,
            march_steps: 48,
            rotation_step: 0.005,
        }
    }

    pub fn detect(viewport_width: f32, user_agent: Option<&str>, mobile_width: f32) -> Self {
        let narrow = viewport_width < mobile_width;
        let mobile_agent = user_agent.is_some_and(is_mobile_user_agent);

        if narrow || mobile_agent {
            Self::constrained()
        } else {
            Self::desktop()
        }
    }

    pub fn clamp_pixel_ratio(&self, ratio: f32) -> f32 {
        if ratio.is_finite() && ratio > 0.0 {
            ratio.min(self.max_pixel_ratio)
        } else {
            1.0
        }
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}
