use glam::{Vec2, Vec3};

use super::ray::Ray;

const HIT_EPSILON: f32 = 1e-3;
const NORMAL_EPSILON: f32 = 1e-3;

/// Signed distance to an axis-aligned box centred on the origin
pub fn sd_box(p: Vec3, half_extents: Vec3) -> f32 {
    let q = p.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y).max(q.z).min(0.0)
}

pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Torus lying in the XY plane, ring around the Z axis
pub fn sd_torus(p: Vec3, radius: f32, tube: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.y).length() - radius, p.z);
    q.length() - tube
}

/// Sphere-trace `sdf` along `ray`, returning the hit distance
pub fn march<F>(ray: &Ray, sdf: F, max_steps: u32, max_distance: f32) -> Option<f32>
where
    F: Fn(Vec3) -> f32,
{
    let mut t = 0.0;
    for _ in 0..max_steps {
        let d = sdf(ray.at(t));
        if d < HIT_EPSILON {
            return Some(t);
        }
        t += d;
        if t > max_distance {
            break;
        }
    }
    None
}

/// Surface normal from the central-difference gradient of `sdf`
pub fn gradient_normal<F>(p: Vec3, sdf: F) -> Vec3
where
    F: Fn(Vec3) -> f32,
{
    let ex = Vec3::new(NORMAL_EPSILON, 0.0, 0.0);
    let ey = Vec3::new(0.0, NORMAL_EPSILON, 0.0);
    let ez = Vec3::new(0.0, 0.0, NORMAL_EPSILON);
    Vec3::new(
        sdf(p + ex) - sdf(p - ex),
        sdf(p + ey) - sdf(p - ey),
        sdf(p + ez) - sdf(p - ez),
    )
    .normalize_or_zero()
}
