use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::math::Ray;

pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Fraction of the remaining distance covered per frame
pub const EASE_FACTOR: f32 = 0.05;
/// Closer than this and the eased value snaps onto its target
pub const ARRIVAL_EPSILON: f32 = 1e-3;

/// Perspective camera looking down its local -Z axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub position: Vec3,
    /// Euler angles, XYZ order
    pub rotation: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl SceneCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            rotation: Vec3::ZERO,
            fov_degrees: FIELD_OF_VIEW_DEGREES,
            aspect: sanitize_aspect(aspect),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    /// World-space ray through a point in normalised device coordinates
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = (self.projection_matrix() * self.view_matrix()).inverse();
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.position, far - self.position)
    }

    /// Move one easing step towards `position`/`rotation`. Returns true once both have arrived.
    pub fn ease_towards(&mut self, position: Vec3, rotation: Vec3) -> bool {
        let (next_position, position_done) = ease_vec3(self.position, position);
        let (next_rotation, rotation_done) = ease_vec3(self.rotation, rotation);
        self.position = next_position;
        self.rotation = next_rotation;
        position_done && rotation_done
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

pub fn ease_vec3(current: Vec3, target: Vec3) -> (Vec3, bool) {
    if current.distance(target) < ARRIVAL_EPSILON {
        return (target, true);
    }
    let next = current + (target - current) * EASE_FACTOR;
    if next.distance(target) < ARRIVAL_EPSILON {
        (target, true)
    } else {
        (next, false)
    }
}

pub fn ease_f32(current: f32, target: f32) -> (f32, bool) {
    if (current - target).abs() < ARRIVAL_EPSILON {
        return (target, true);
    }
    let next = current + (target - current) * EASE_FACTOR;
    if (next - target).abs() < ARRIVAL_EPSILON {
        (target, true)
    } else {
        (next, false)
    }
}
