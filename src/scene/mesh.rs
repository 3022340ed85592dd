use glam::{EulerRot, Quat, Vec3};

use super::backend::{FrameObject, GeometryHandle, MaterialHandle};
use super::device::DeviceProfile;
use crate::math::{sdf, Rgb, AABB};

pub const CUBE_NAME: &str = "interactive-cube";
pub const SPHERE_NAME: &str = "interactive-sphere";
pub const TORUS_NAME: &str = "interactive-torus";

pub const HOVER_EMISSIVE: u32 = 0x444444;
pub const HOVER_SCALE: f32 = 1.1;

/// Index of an accent mesh inside the attached scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Geometry description; tessellation only affects how wireframes are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        size: Vec3,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl Shape {
    /// Signed distance in the shape's local frame
    pub fn distance(&self, p: Vec3) -> f32 {
        match *self {
            Shape::Box { size } => sdf::sd_box(p, size * 0.5),
            Shape::Sphere { radius, .. } => sdf::sd_sphere(p, radius),
            Shape::Torus { radius, tube, .. } => sdf::sd_torus(p, radius, tube),
        }
    }

    pub fn bounds(&self) -> AABB {
        let half = match *self {
            Shape::Box { size } => size * 0.5,
            Shape::Sphere { radius, .. } => Vec3::splat(radius),
            Shape::Torus { radius, tube, .. } => Vec3::new(radius + tube, radius + tube, tube),
        };
        AABB::centered(half)
    }

    /// Radius of a sphere around the origin enclosing the shape
    pub fn bounding_radius(&self) -> f32 {
        self.bounds().enclosing_radius()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDesc {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub wireframe: bool,
}

impl MaterialDesc {
    pub const fn standard(color: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            color: Rgb::from_hex(color),
            metalness,
            roughness,
            wireframe: false,
        }
    }

    pub const fn wireframe(color: u32) -> Self {
        Self {
            color: Rgb::from_hex(color),
            metalness: 0.0,
            roughness: 1.0,
            wireframe: true,
        }
    }
}

/// Static description of an accent mesh before it is handed to a backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentSpec {
    pub name: &'static str,
    pub shape: Shape,
    pub material: MaterialDesc,
    pub position: Vec3,
}

/// The three accent meshes, tessellated for `profile`
pub fn accent_specs(profile: &DeviceProfile) -> [AccentSpec; 3] {
    let (sphere_w, sphere_h) = profile.sphere_segments;
    let (torus_radial, torus_tubular) = profile.torus_segments;

    [
        AccentSpec {
            name: CUBE_NAME,
            shape: Shape::Box { size: Vec3::ONE },
            material: MaterialDesc::standard(0x3b82f6, 0.5, 0.5),
            position: Vec3::ZERO,
        },
        AccentSpec {
            name: SPHERE_NAME,
            shape: Shape::Sphere {
                radius: 0.5,
                width_segments: sphere_w,
                height_segments: sphere_h,
            },
            material: MaterialDesc::wireframe(0x8b5cf6),
            position: Vec3::new(-2.0, 0.0, 0.0),
        },
        AccentSpec {
            name: TORUS_NAME,
            shape: Shape::Torus {
                radius: 0.5,
                tube: 0.2,
                radial_segments: torus_radial,
                tubular_segments: torus_tubular,
            },
            material: MaterialDesc::standard(0xec4899, 0.7, 0.3),
            position: Vec3::new(2.0, 0.0, 0.0),
        },
    ]
}

/// Live accent mesh owned by the attached scene
#[derive(Debug, Clone, PartialEq)]
pub struct AccentMesh {
    pub id: MeshId,
    pub name: &'static str,
    pub shape: Shape,
    pub material: MaterialDesc,
    pub geometry_handle: GeometryHandle,
    pub material_handle: MaterialHandle,
    pub position: Vec3,
    /// Euler angles, XYZ order
    pub rotation: Vec3,
    pub scale: f32,
    pub emissive: Rgb,
    hovered: bool,
}

impl AccentMesh {
    pub fn new(
        id: MeshId,
        spec: &AccentSpec,
        geometry_handle: GeometryHandle,
        material_handle: MaterialHandle,
    ) -> Self {
        Self {
            id,
            name: spec.name,
            shape: spec.shape,
            material: spec.material,
            geometry_handle,
            material_handle,
            position: spec.position,
            rotation: Vec3::ZERO,
            scale: 1.0,
            emissive: Rgb::BLACK,
            hovered: false,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if hovered {
            self.emissive = Rgb::from_hex(HOVER_EMISSIVE);
            self.scale = HOVER_SCALE;
        } else {
            self.emissive = Rgb::BLACK;
            self.scale = 1.0;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn spin(&mut self, step: f32) {
        self.rotation.x += step;
        self.rotation.y += step;
    }

    pub fn frame_object(&self) -> FrameObject {
        FrameObject {
            geometry: self.geometry_handle,
            material: self.material_handle,
            position: self.position,
            orientation: self.orientation(),
            scale: self.scale,
            emissive: self.emissive,
        }
    }
}
