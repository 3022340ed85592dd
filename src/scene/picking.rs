use glam::Vec2;

use super::mesh::{AccentMesh, MeshId, Shape};
use crate::math::{intersect_aabb, intersect_sphere, sdf, Ray};

const PICK_MARCH_STEPS: u32 = 96;
const PICK_MAX_DISTANCE: f32 = 100.0;

/// Bounding box of the rendering surface in window coordinates (logical px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Physical pixels per logical pixel
    pub pixel_ratio: f32,
}

impl SurfaceBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Normalised device coordinates of a window point; `None` for an empty box
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            ((x - self.left) / self.width) * 2.0 - 1.0,
            -((y - self.top) / self.height) * 2.0 + 1.0,
        ))
    }
}

/// Distance along a local-space ray to `shape`, if it is hit
pub fn intersect_shape(shape: &Shape, ray: &Ray, march_steps: u32) -> Option<f32> {
    match *shape {
        Shape::Box { .. } => {
            let bounds = shape.bounds();
            let t = intersect_aabb(ray.origin, ray.direction, bounds.min, bounds.max);
            (t >= 0.0).then_some(t)
        }
        Shape::Sphere { radius, .. } => {
            intersect_sphere(ray.origin, ray.direction, glam::Vec3::ZERO, radius)
        }
        Shape::Torus { .. } => {
            // Skip the march when the enclosing sphere is missed
            intersect_sphere(ray.origin, ray.direction, glam::Vec3::ZERO, shape.bounding_radius())?;
            sdf::march(ray, |p| shape.distance(p), march_steps, PICK_MAX_DISTANCE)
        }
    }
}

/// World-space hit distance against a placed mesh
pub fn intersect_mesh(mesh: &AccentMesh, ray: &Ray) -> Option<f32> {
    let local = ray.to_local(mesh.position, mesh.orientation(), mesh.scale);
    intersect_shape(&mesh.shape, &local, PICK_MARCH_STEPS).map(|t| t * mesh.scale)
}

/// Nearest mesh hit by `ray`
pub fn pick(meshes: &[AccentMesh], ray: &Ray) -> Option<(MeshId, f32)> {
    meshes
        .iter()
        .filter_map(|mesh| intersect_mesh(mesh, ray).map(|t| (mesh.id, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::backend::{GeometryHandle, MaterialHandle};
    use crate::scene::device::DeviceProfile;
    use crate::scene::mesh::accent_specs;
    use glam::Vec3;

    fn meshes() -> Vec<AccentMesh> {
        accent_specs(&DeviceProfile::desktop())
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                AccentMesh::new(MeshId(i), spec, GeometryHandle(i as u64), MaterialHandle(i as u64))
            })
            .collect()
    }

    #[test]
    fn test_ndc_corners() {
        let surface = SurfaceBox::new(100.0, 50.0, 800.0, 600.0);
        assert_eq!(surface.to_ndc(100.0, 50.0), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(surface.to_ndc(900.0, 650.0), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(surface.to_ndc(500.0, 350.0), Some(Vec2::ZERO));
    }

    #[test]
    fn test_ndc_empty_box() {
        assert_eq!(SurfaceBox::new(0.0, 0.0, 0.0, 600.0).to_ndc(1.0, 1.0), None);
    }

    #[test]
    fn test_pick_each_mesh_head_on() {
        let meshes = meshes();
        for (index, x) in [(0, 0.0), (1, -2.0), (2, 2.5)] {
            let ray = Ray::new(Vec3::new(x, 0.0, 5.0), Vec3::NEG_Z);
            let (id, _) = pick(&meshes, &ray).unwrap();
            assert_eq!(id, MeshId(index));
        }
    }

    #[test]
    fn test_pick_misses_gap() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(pick(&meshes(), &ray), None);
    }

    #[test]
    fn test_pick_through_torus_hole_misses() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(pick(&meshes(), &ray), None);
    }

    #[test]
    fn test_pick_prefers_nearest() {
        // Looking along +X from the left, the sphere is in front of the cube
        let ray = Ray::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        let (id, t) = pick(&meshes(), &ray).unwrap();
        assert_eq!(id, MeshId(1));
        assert!((t - 7.5).abs() < 1e-3);
    }

    #[test]
    fn test_hover_scale_grows_hit_area() {
        let mut meshes = meshes();
        let ray = Ray::new(Vec3::new(0.53, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(pick(&meshes[..1], &ray), None);

        meshes[0].set_hovered(true);
        assert_eq!(pick(&meshes[..1], &ray).map(|(id, _)| id), Some(MeshId(0)));
    }
}
