//! Decorative background scene: accent meshes, lights and a camera that
//! follows the active section.

mod backend;
mod camera;
mod controller;
mod device;
mod frame_loop;
mod lights;
mod mesh;
mod picking;
mod targets;

pub use backend::{
    FrameObject, GeometryHandle, MaterialHandle, RenderBackend, RenderSettings, SceneFrame,
};
pub use camera::{ease_f32, ease_vec3, SceneCamera, ARRIVAL_EPSILON, EASE_FACTOR};
pub use controller::{SceneConfig, SceneController, BACKGROUND_COLOR};
pub use device::{is_mobile_user_agent, DeviceProfile, DEFAULT_MOBILE_WIDTH};
pub use frame_loop::FrameLoop;
pub use lights::{AmbientLight, DirectionalLight, PointLight, SceneLights};
pub use mesh::{
    accent_specs, AccentMesh, AccentSpec, MaterialDesc, MeshId, Shape, CUBE_NAME, HOVER_EMISSIVE,
    HOVER_SCALE, SPHERE_NAME, TORUS_NAME,
};
pub use picking::{intersect_mesh, intersect_shape, pick, SurfaceBox};
pub use targets::{section_for_mesh, CameraTarget, CAMERA_TARGETS};
