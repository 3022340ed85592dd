use glam::{Quat, Vec3};

/// Half-line with a normalised direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Express the ray in the local frame of an object placed at `position`
    /// with `rotation` and uniform `scale`. Distances along the local ray are
    /// world distances divided by `scale`.
    pub fn to_local(&self, position: Vec3, rotation: Quat, scale: f32) -> Ray {
        let inv = rotation.inverse();
        Ray {
            origin: inv * (self.origin - position) / scale,
            direction: inv * self.direction,
        }
    }
}

pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> f32 {
    const EPSILON: f32 = 1e-8;

    // Near-zero components become a huge inverse so the slab test stays finite
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return -1.0;
    }

    if t_near < 0.0 {
        if t_far > 0.001 {
            t_far
        } else {
            -1.0
        }
    } else {
        t_near
    }
}

/// Nearest positive hit distance against a sphere, if any
pub fn intersect_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-half_b - sqrt_d) / a;
    if t > 1e-4 {
        return Some(t);
    }
    let t = (-half_b + sqrt_d) / a;
    if t > 1e-4 {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_aabb_hit() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(5.0, 2.0, 2.0),
            Vec3::new(10.0, 3.0, 3.0),
        );
        assert!(t < 0.0);
    }

    #[test]
    fn test_intersect_sphere_front() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_sphere_from_inside() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert!((t.unwrap() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_sphere_miss() {
        assert_eq!(
            intersect_sphere(Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 0.0, -5.0), 1.0),
            None
        );
    }

    #[test]
    fn test_ray_to_local_undoes_transform() {
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let position = Vec3::new(2.0, 0.0, 0.0);
        let world = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);

        let local = world.to_local(position, rotation, 2.0);
        assert!(local.origin.distance(rotation.inverse() * Vec3::new(0.0, 0.0, 2.5)) < 1e-5);
        assert!((local.direction.length() - 1.0).abs() < 1e-5);
    }
}
