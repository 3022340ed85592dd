use std::collections::HashMap;
use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec2, Vec3};
use log::{debug, info, warn};

use crate::math::{intersect_sphere, sdf, Ray, Rgb};
use crate::scene::{
    intersect_shape, GeometryHandle, MaterialDesc, MaterialHandle, RenderBackend, RenderSettings,
    SceneFrame, SceneLights, Shape,
};

/// Fraction of the physical surface resolution the CPU renderer draws at
pub const DEFAULT_RENDER_SCALE: f32 = 0.5;

const WIRE_WIDTH: f32 = 0.06;

const SUPERSAMPLE_OFFSETS: [Vec2; 4] = [
    Vec2::new(0.25, 0.25),
    Vec2::new(0.75, 0.25),
    Vec2::new(0.25, 0.75),
    Vec2::new(0.75, 0.75),
];
const CENTER_OFFSET: [Vec2; 1] = [Vec2::new(0.5, 0.5)];

/// One frame object with its geometry and material resolved
struct Placed<'a> {
    shape: &'a Shape,
    material: &'a MaterialDesc,
    position: Vec3,
    orientation: Quat,
    scale: f32,
    emissive: Rgb,
    bounding_radius: f32,
}

struct Hit {
    t: f32,
    object: usize,
    local_point: Vec3,
}

/// CPU ray-marching renderer producing an RGBA8 frame.
///
/// Draws at `render_scale` of the physical target; the host stretches the
/// frame over the window.
pub struct SoftwareBackend {
    render_scale: f32,
    settings: Option<RenderSettings>,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    geometries: HashMap<GeometryHandle, Shape>,
    materials: HashMap<MaterialHandle, MaterialDesc>,
    next_handle: u64,
    frames: u64,
}

impl SoftwareBackend {
    pub fn new(render_scale: f32) -> Self {
        let render_scale = if render_scale.is_finite() && render_scale > 0.0 {
            render_scale.min(1.0)
        } else {
            DEFAULT_RENDER_SCALE
        };

        Self {
            render_scale,
            settings: None,
            width: 0,
            height: 0,
            pixels: Vec::new(),
            geometries: HashMap::new(),
            materials: HashMap::new(),
            next_handle: 1,
            frames: 0,
        }
    }

    pub fn render_scale(&self) -> f32 {
        self.render_scale
    }

    pub fn is_initialized(&self) -> bool {
        self.settings.is_some()
    }

    /// Size of the produced frame
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Last rendered frame, RGBA8, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn live_materials(&self) -> usize {
        self.materials.len()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    fn allocate(&mut self, physical_width: u32, physical_height: u32) {
        let scaled = |v: u32| ((v as f32 * self.render_scale).round() as u32).max(1);
        self.width = scaled(physical_width);
        self.height = scaled(physical_height);
        self.pixels = vec![0; (self.width * self.height * 4) as usize];

        if let Some(settings) = self.settings {
            let [r, g, b, a] = settings.background.to_rgba8();
            for pixel in self.pixels.chunks_exact_mut(4) {
                pixel.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn resolve<'a>(&'a self, frame: &SceneFrame<'_>) -> Vec<Placed<'a>> {
        frame
            .objects
            .iter()
            .filter_map(|object| {
                let shape = self.geometries.get(&object.geometry);
                let material = self.materials.get(&object.material);
                match (shape, material) {
                    (Some(shape), Some(material)) => Some(Placed {
                        shape,
                        material,
                        position: object.position,
                        orientation: object.orientation,
                        scale: object.scale,
                        emissive: object.emissive,
                        bounding_radius: shape.bounding_radius() * object.scale,
                    }),
                    _ => {
                        warn!(
                            "skipping frame object with released handles {:?}/{:?}",
                            object.geometry, object.material
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for SoftwareBackend {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_SCALE)
    }
}

impl RenderBackend for SoftwareBackend {
    fn init(&mut self, settings: &RenderSettings) {
        self.settings = Some(*settings);
        self.frames = 0;
        self.allocate(settings.width, settings.height);
        info!(
            "software renderer: {}x{} (scale {:.2}, antialias {})",
            self.width, self.height, self.render_scale, settings.antialias
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        let Some(settings) = self.settings.as_mut() else {
            return;
        };
        settings.width = width;
        settings.height = height;
        self.allocate(width, height);
        debug!("software renderer resized to {}x{}", self.width, self.height);
    }

    fn create_geometry(&mut self, shape: &Shape) -> GeometryHandle {
        let handle = GeometryHandle(self.next_id());
        self.geometries.insert(handle, *shape);
        handle
    }

    fn create_material(&mut self, material: &MaterialDesc) -> MaterialHandle {
        let handle = MaterialHandle(self.next_id());
        self.materials.insert(handle, *material);
        handle
    }

    fn release_geometry(&mut self, handle: GeometryHandle) {
        if self.geometries.remove(&handle).is_none() {
            warn!("release of unknown geometry {:?}", handle);
        }
    }

    fn release_material(&mut self, handle: MaterialHandle) {
        if self.materials.remove(&handle).is_none() {
            warn!("release of unknown material {:?}", handle);
        }
    }

    fn render(&mut self, frame: &SceneFrame<'_>) {
        let Some(settings) = self.settings else {
            return;
        };

        let (width, height) = (self.width, self.height);
        let mut pixels = std::mem::take(&mut self.pixels);
        let objects = self.resolve(frame);
        let inverse = (frame.camera.projection_matrix() * frame.camera.view_matrix()).inverse();
        let offsets: &[Vec2] = if settings.antialias {
            &SUPERSAMPLE_OFFSETS
        } else {
            &CENTER_OFFSET
        };

        for (index, pixel) in pixels.chunks_exact_mut(4).enumerate() {
            let x = (index as u32 % width) as f32;
            let y = (index as u32 / width) as f32;

            let mut color = Rgb::BLACK;
            for offset in offsets {
                let ndc = Vec2::new(
                    (x + offset.x) / width as f32 * 2.0 - 1.0,
                    1.0 - (y + offset.y) / height as f32 * 2.0,
                );
                let ray = primary_ray(&inverse, frame.camera.position, ndc);
                color = color.add(trace(&ray, &objects, frame.lights, &settings));
            }
            let color = color.scale(1.0 / offsets.len() as f32);
            pixel.copy_from_slice(&color.to_rgba8());
        }

        drop(objects);
        self.pixels = pixels;
        self.frames += 1;
    }

    fn release(&mut self) {
        if !self.geometries.is_empty() || !self.materials.is_empty() {
            warn!(
                "render context released with {} geometries and {} materials alive",
                self.geometries.len(),
                self.materials.len()
            );
        }
        self.settings = None;
        self.width = 0;
        self.height = 0;
        self.pixels = Vec::new();
    }
}

fn primary_ray(inverse_view_projection: &Mat4, origin: Vec3, ndc: Vec2) -> Ray {
    let far = inverse_view_projection.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    Ray::new(origin, far - origin)
}

fn trace(ray: &Ray, objects: &[Placed<'_>], lights: &SceneLights, settings: &RenderSettings) -> Rgb {
    let mut nearest: Option<Hit> = None;

    for (index, object) in objects.iter().enumerate() {
        if intersect_sphere(ray.origin, ray.direction, object.position, object.bounding_radius)
            .is_none()
        {
            continue;
        }

        let local = ray.to_local(object.position, object.orientation, object.scale);
        let Some(t_local) = intersect_shape(object.shape, &local, settings.march_steps) else {
            continue;
        };
        let local_point = local.at(t_local);
        if object.material.wireframe && !on_wire(object.shape, local_point) {
            continue;
        }

        let t = t_local * object.scale;
        if nearest.as_ref().map_or(true, |hit| t < hit.t) {
            nearest = Some(Hit {
                t,
                object: index,
                local_point,
            });
        }
    }

    match nearest {
        Some(hit) => shade(ray, &hit, &objects[hit.object], lights),
        None => settings.background,
    }
}

/// Ambient + Lambert + a roughness-driven highlight, plus emissive
fn shade(ray: &Ray, hit: &Hit, object: &Placed<'_>, lights: &SceneLights) -> Rgb {
    let shape = object.shape;
    let local_normal = sdf::gradient_normal(hit.local_point, |p| shape.distance(p));
    let mut normal = (object.orientation * local_normal).normalize_or_zero();
    let view = -ray.direction;
    // Wireframes show their back lines too
    if object.material.wireframe && normal.dot(view) < 0.0 {
        normal = -normal;
    }

    let point = ray.at(hit.t);
    let material = object.material;
    let base = material.color;

    let directional = lights.directional;
    let to_directional = directional.direction();

    let accent = lights.accent;
    let to_accent = accent.position - point;
    let accent_distance = to_accent.length();
    let to_accent = to_accent / accent_distance.max(1e-4);

    let irradiance = lights
        .ambient
        .color
        .scale(lights.ambient.intensity)
        .add(
            directional
                .color
                .scale(directional.intensity * normal.dot(to_directional).max(0.0)),
        )
        .add(accent.color.scale(
            accent.intensity * accent.attenuation(accent_distance) * normal.dot(to_accent).max(0.0),
        ));

    let diffuse = base.mul(irradiance).scale(1.0 - 0.5 * material.metalness);

    let shininess = 8.0 + (1.0 - material.roughness) * 120.0;
    let strength = (1.0 - material.roughness) * 0.6;
    let highlight = |to_light: Vec3| {
        let half = (to_light + view).normalize_or_zero();
        normal.dot(half).max(0.0).powf(shininess) * strength
    };
    let specular_tint = Rgb::WHITE.lerp(base, material.metalness);
    let specular = specular_tint
        .mul(directional.color)
        .scale(highlight(to_directional) * directional.intensity)
        .add(
            specular_tint
                .mul(accent.color)
                .scale(highlight(to_accent) * accent.intensity),
        );

    diffuse.add(specular).add(object.emissive)
}

fn near_line(coordinate: f32) -> bool {
    let f = coordinate.rem_euclid(1.0);
    f < WIRE_WIDTH || f > 1.0 - WIRE_WIDTH
}

/// Whether a local surface point lies on one of the shape's tessellation lines
fn on_wire(shape: &Shape, p: Vec3) -> bool {
    match *shape {
        Shape::Sphere {
            width_segments,
            height_segments,
            ..
        } => {
            let n = p.normalize_or_zero();
            let u = (n.z.atan2(n.x) / (2.0 * PI) + 0.5) * width_segments as f32;
            let v = n.y.clamp(-1.0, 1.0).acos() / PI * height_segments as f32;
            near_line(u) || near_line(v)
        }
        Shape::Torus {
            radius,
            radial_segments,
            tubular_segments,
            ..
        } => {
            let ring = Vec2::new(p.x, p.y);
            let u = (p.y.atan2(p.x) / (2.0 * PI) + 0.5) * tubular_segments as f32;
            let v = (p.z.atan2(ring.length() - radius) / (2.0 * PI) + 0.5) * radial_segments as f32;
            near_line(u) || near_line(v)
        }
        Shape::Box { size } => {
            let half = size * 0.5;
            let margin = size * WIRE_WIDTH;
            let on_face = (p.abs() - (half - margin)).cmpgt(Vec3::ZERO);
            on_face.bitmask().count_ones() >= 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{
        accent_specs, DeviceProfile, FrameObject, SceneCamera, BACKGROUND_COLOR,
    };

    fn settings(antialias: bool) -> RenderSettings {
        RenderSettings {
            width: 48,
            height: 32,
            antialias,
            march_steps: 64,
            background: Rgb::from_hex(BACKGROUND_COLOR),
        }
    }

    fn pixel(backend: &SoftwareBackend, x: u32, y: u32) -> [u8; 4] {
        let (width, _) = backend.dimensions();
        let i = ((y * width + x) * 4) as usize;
        let p = backend.pixels();
        [p[i], p[i + 1], p[i + 2], p[i + 3]]
    }

    #[test]
    fn test_init_allocates_scaled_frame() {
        let mut backend = SoftwareBackend::new(0.5);
        backend.init(&settings(false));
        assert_eq!(backend.dimensions(), (24, 16));
        assert_eq!(backend.pixels().len(), 24 * 16 * 4);

        backend.resize(100, 10);
        assert_eq!(backend.dimensions(), (50, 5));
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        assert_eq!(SoftwareBackend::new(0.0).render_scale(), DEFAULT_RENDER_SCALE);
        assert_eq!(SoftwareBackend::new(4.0).render_scale(), 1.0);
    }

    #[test]
    fn test_resources_are_tracked() {
        let mut backend = SoftwareBackend::default();
        let spec = accent_specs(&DeviceProfile::desktop())[0];
        let geometry = backend.create_geometry(&spec.shape);
        let material = backend.create_material(&spec.material);
        assert_eq!((backend.live_geometries(), backend.live_materials()), (1, 1));

        backend.release_geometry(geometry);
        backend.release_material(material);
        assert_eq!((backend.live_geometries(), backend.live_materials()), (0, 0));
    }

    #[test]
    fn test_render_before_init_is_noop() {
        let mut backend = SoftwareBackend::default();
        let camera = SceneCamera::default();
        let lights = SceneLights::portfolio();
        backend.render(&SceneFrame {
            camera: &camera,
            lights: &lights,
            objects: Vec::new(),
        });
        assert_eq!(backend.frames_rendered(), 0);
        assert!(backend.pixels().is_empty());
    }

    #[test]
    fn test_cube_is_drawn_over_background() {
        let mut backend = SoftwareBackend::new(1.0);
        backend.init(&settings(true));

        let spec = accent_specs(&DeviceProfile::desktop())[0];
        let geometry = backend.create_geometry(&spec.shape);
        let material = backend.create_material(&spec.material);

        let camera = SceneCamera::new(48.0 / 32.0);
        let lights = SceneLights::portfolio();
        backend.render(&SceneFrame {
            camera: &camera,
            lights: &lights,
            objects: vec![FrameObject {
                geometry,
                material,
                position: Vec3::ZERO,
                orientation: Quat::IDENTITY,
                scale: 1.0,
                emissive: Rgb::BLACK,
            }],
        });

        let background = Rgb::from_hex(BACKGROUND_COLOR).to_rgba8();
        assert_eq!(backend.frames_rendered(), 1);
        assert_eq!(pixel(&backend, 0, 0), background);
        let center = pixel(&backend, 24, 16);
        assert_ne!(center, background);
        // Blue cube
        assert!(center[2] > center[0]);
    }

    #[test]
    fn test_release_drops_frame() {
        let mut backend = SoftwareBackend::default();
        backend.init(&settings(false));
        backend.release();
        assert!(!backend.is_initialized());
        assert_eq!(backend.dimensions(), (0, 0));
    }

    #[test]
    fn test_sphere_wire_lines() {
        let shape = Shape::Sphere {
            radius: 0.5,
            width_segments: 4,
            height_segments: 4,
        };
        // Equator is a latitude line for an even segment count
        assert!(on_wire(&shape, Vec3::new(0.5, 0.0, 0.0)));
        // Between lines on both axes
        let p = Vec3::new(
            (PI / 4.0).cos() * (3.0 * PI / 8.0).sin(),
            (3.0 * PI / 8.0).cos(),
            (PI / 4.0).sin() * (3.0 * PI / 8.0).sin(),
        ) * 0.5;
        assert!(!on_wire(&shape, p));
    }
}
