mod raster;
mod scene_pass;
mod surface;

pub use raster::{SoftwareBackend, DEFAULT_RENDER_SCALE};
pub use surface::SurfaceRenderer;
