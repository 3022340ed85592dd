use glam::Vec3;

use crate::math::Rgb;
use crate::section::SectionId;

/// Camera pose and accent light configuration associated with one section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    /// Euler angles, XYZ order
    pub rotation: Vec3,
    pub light_color: Rgb,
    pub light_intensity: f32,
}

impl CameraTarget {
    const fn new(position: Vec3, rotation: Vec3, light_color: u32, light_intensity: f32) -> Self {
        Self {
            position,
            rotation,
            light_color: Rgb::from_hex(light_color),
            light_intensity,
        }
    }

    /// Target for `section`; absent sections fall back to the hero pose
    pub fn for_section(section: Option<SectionId>) -> Self {
        match section {
            Some(section) => CAMERA_TARGETS[section.index()],
            None => Self::default(),
        }
    }
}

impl Default for CameraTarget {
    fn default() -> Self {
        CAMERA_TARGETS[SectionId::Hero.index()]
    }
}

/// One pose per section, in `SectionId::ALL` order
pub const CAMERA_TARGETS: [CameraTarget; 6] = [
    // hero
    CameraTarget::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 0x3b82f6, 1.0),
    // about
    CameraTarget::new(Vec3::new(2.0, 0.5, 6.0), Vec3::new(0.0, 0.3, 0.0), 0x8b5cf6, 1.0),
    // experience
    CameraTarget::new(Vec3::new(-2.0, 1.0, 5.5), Vec3::new(-0.1, -0.3, 0.0), 0xec4899, 1.0),
    // projects
    CameraTarget::new(Vec3::new(0.0, 2.0, 7.0), Vec3::new(-0.25, 0.0, 0.0), 0x10b981, 1.0),
    // services
    CameraTarget::new(Vec3::new(1.5, -1.0, 6.0), Vec3::new(0.1, 0.2, 0.0), 0xf59e0b, 1.0),
    // contact
    CameraTarget::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, 0x3b82f6, 1.5),
];

/// Section a clicked accent mesh leads to; unknown names go home
pub fn section_for_mesh(name: &str) -> SectionId {
    match name {
        super::mesh::CUBE_NAME => SectionId::Projects,
        super::mesh::SPHERE_NAME => SectionId::About,
        super::mesh::TORUS_NAME => SectionId::Experience,
        _ => SectionId::Hero,
    }
}
