use glam::{Quat, Vec3};

use super::camera::SceneCamera;
use super::lights::SceneLights;
use super::mesh::{MaterialDesc, Shape};
use crate::math::Rgb;

/// Opaque geometry id handed out by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryHandle(pub u64);

/// Opaque material id handed out by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialHandle(pub u64);

/// Render context parameters fixed at attach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Physical target size in pixels
    pub width: u32,
    pub height: u32,
    pub antialias: bool,
    pub march_steps: u32,
    pub background: Rgb,
}

/// Per-frame placement of one mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameObject {
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
    pub emissive: Rgb,
}

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone)]
pub struct SceneFrame<'a> {
    pub camera: &'a SceneCamera,
    pub lights: &'a SceneLights,
    pub objects: Vec<FrameObject>,
}

/// Rendering library seam of the scene controller.
///
/// Every handle returned by `create_*` is released exactly once by the
/// controller before `release` is called.
pub trait RenderBackend {
    fn init(&mut self, settings: &RenderSettings);

    /// New physical target size
    fn resize(&mut self, width: u32, height: u32);

    fn create_geometry(&mut self, shape: &Shape) -> GeometryHandle;

    fn create_material(&mut self, material: &MaterialDesc) -> MaterialHandle;

    fn release_geometry(&mut self, handle: GeometryHandle);

    fn release_material(&mut self, handle: MaterialHandle);

    fn render(&mut self, frame: &SceneFrame<'_>);

    /// Drop the render context
    fn release(&mut self);
}
