use log::{debug, info, trace};

use super::backend::{RenderBackend, RenderSettings, SceneFrame};
use super::camera::SceneCamera;
use super::device::{DeviceProfile, DEFAULT_MOBILE_WIDTH};
use super::frame_loop::FrameLoop;
use super::lights::SceneLights;
use super::mesh::{accent_specs, AccentMesh, MeshId};
use super::picking::{pick, SurfaceBox};
use super::targets::{section_for_mesh, CameraTarget};
use crate::math::Rgb;
use crate::navigator::SectionNavigator;
use crate::page::Page;
use crate::section::SectionId;

pub const BACKGROUND_COLOR: u32 = 0x0a0a0a;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Host user agent, used for device detection
    pub user_agent: Option<String>,
    pub mobile_width: f32,
    pub background: Rgb,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            mobile_width: DEFAULT_MOBILE_WIDTH,
            background: Rgb::from_hex(BACKGROUND_COLOR),
        }
    }
}

/// State that only exists between `attach` and `detach`
#[derive(Debug)]
struct AttachedScene {
    surface: SurfaceBox,
    profile: DeviceProfile,
    pixel_ratio: f32,
    camera: SceneCamera,
    lights: SceneLights,
    meshes: Vec<AccentMesh>,
    hovered: Option<MeshId>,
}

impl AttachedScene {
    fn physical_size(&self) -> (u32, u32) {
        physical_size(&self.surface, self.pixel_ratio)
    }
}

fn physical_size(surface: &SurfaceBox, pixel_ratio: f32) -> (u32, u32) {
    (
        (surface.width * pixel_ratio).round().max(1.0) as u32,
        (surface.height * pixel_ratio).round().max(1.0) as u32,
    )
}

/// Decorative background scene: accent meshes, eased camera and lights.
///
/// The camera and accent light follow the [`CameraTarget`] of the active
/// section; pointer hits on accent meshes hover and navigate.
pub struct SceneController<B: RenderBackend> {
    backend: B,
    config: SceneConfig,
    attached: Option<AttachedScene>,
    target: CameraTarget,
    frame_loop: FrameLoop,
    navigator: SectionNavigator,
}

impl<B: RenderBackend> SceneController<B> {
    pub fn new(backend: B, config: SceneConfig) -> Self {
        Self {
            backend,
            config,
            attached: None,
            target: CameraTarget::default(),
            frame_loop: FrameLoop::new(),
            navigator: SectionNavigator::new(),
        }
    }

    /// Build the scene on `surface` and start the frame loop.
    /// An existing scene is torn down first.
    pub fn attach(&mut self, surface: SurfaceBox) {
        if self.attached.is_some() {
            debug!("attach while attached, detaching previous scene");
            self.detach();
        }

        let profile = DeviceProfile::detect(
            surface.width,
            self.config.user_agent.as_deref(),
            self.config.mobile_width,
        );
        let pixel_ratio = profile.clamp_pixel_ratio(surface.pixel_ratio);
        let (width, height) = physical_size(&surface, pixel_ratio);

        self.backend.init(&RenderSettings {
            width,
            height,
            antialias: profile.antialias,
            march_steps: profile.march_steps,
            background: self.config.background,
        });

        let meshes = accent_specs(&profile)
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let geometry = self.backend.create_geometry(&spec.shape);
                let material = self.backend.create_material(&spec.material);
                AccentMesh::new(MeshId(index), spec, geometry, material)
            })
            .collect::<Vec<_>>();

        info!(
            "scene attached: {}x{} px (ratio {:.2}), {} meshes, {} device",
            width,
            height,
            pixel_ratio,
            meshes.len(),
            if profile.constrained { "constrained" } else { "desktop" }
        );

        self.attached = Some(AttachedScene {
            surface,
            profile,
            pixel_ratio,
            camera: SceneCamera::new(surface.aspect()),
            lights: SceneLights::portfolio(),
            meshes,
            hovered: None,
        });
        self.frame_loop.start();
    }

    /// New surface size in logical pixels; ignored before attach
    pub fn resize(&mut self, width: f32, height: f32) {
        let Some(scene) = self.attached.as_mut() else {
            debug!("resize before attach ignored");
            return;
        };
        if width <= 0.0 || height <= 0.0 {
            debug!("ignoring degenerate resize {}x{}", width, height);
            return;
        }

        scene.surface.width = width;
        scene.surface.height = height;
        scene.camera.set_aspect(scene.surface.aspect());
        let (physical_width, physical_height) = scene.physical_size();
        self.backend.resize(physical_width, physical_height);
    }

    fn pick_at(&self, x: f32, y: f32, surface: &SurfaceBox) -> Option<MeshId> {
        let scene = self.attached.as_ref()?;
        let ndc = surface.to_ndc(x, y)?;
        let ray = scene.camera.ray_through(ndc);
        pick(&scene.meshes, &ray).map(|(id, _)| id)
    }

    /// Hover the nearest mesh under the pointer, reverting the previous one
    pub fn pointer_move(&mut self, x: f32, y: f32, surface: &SurfaceBox) -> Option<MeshId> {
        let hit = self.pick_at(x, y, surface);
        self.set_hovered(hit);
        hit
    }

    /// The pointer no longer reaches the scene (left the window or sits over the page)
    pub fn clear_hover(&mut self) {
        self.set_hovered(None);
    }

    fn set_hovered(&mut self, hit: Option<MeshId>) {
        let Some(scene) = self.attached.as_mut() else {
            return;
        };
        if scene.hovered == hit {
            return;
        }
        if let Some(previous) = scene.hovered.take() {
            scene.meshes[previous.0].set_hovered(false);
        }
        if let Some(id) = hit {
            scene.meshes[id.0].set_hovered(true);
            trace!("hover {}", scene.meshes[id.0].name);
        }
        scene.hovered = hit;
    }

    /// Navigate to the section linked to the mesh under the pointer
    pub fn pointer_click(
        &mut self,
        x: f32,
        y: f32,
        surface: &SurfaceBox,
        page: &mut dyn Page,
    ) -> Option<SectionId> {
        let id = self.pick_at(x, y, surface)?;
        let name = self.mesh(id)?.name;
        let section = section_for_mesh(name);

        info!("clicked {} -> {}", name, section);
        self.navigator.navigate_to(page, section);
        Some(section)
    }

    /// Retarget camera and accent light; the move happens over the next frames
    pub fn on_active_section_changed(&mut self, section: Option<SectionId>) {
        self.target = CameraTarget::for_section(section);
        debug!(
            "camera target -> {}",
            section.map(|s| s.anchor()).unwrap_or("default")
        );
    }

    pub fn on_active_section_name(&mut self, name: &str) {
        self.on_active_section_changed(SectionId::from_anchor(name));
    }

    /// Advance and render one frame. Returns false when nothing ran.
    pub fn frame(&mut self) -> bool {
        let Some(scene) = self.attached.as_mut() else {
            return false;
        };
        if !self.frame_loop.tick() {
            return false;
        }

        scene
            .camera
            .ease_towards(self.target.position, self.target.rotation);
        scene
            .lights
            .ease_accent(self.target.light_color, self.target.light_intensity);

        let step = scene.profile.rotation_step;
        for mesh in &mut scene.meshes {
            mesh.spin(step);
        }

        let frame = SceneFrame {
            camera: &scene.camera,
            lights: &scene.lights,
            objects: scene.meshes.iter().map(AccentMesh::frame_object).collect(),
        };
        self.backend.render(&frame);
        true
    }

    /// Suspend or resume the frame loop. True only when a hidden scene becomes visible.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let resumed = self.frame_loop.set_visible(visible);
        if resumed {
            debug!("scene resumed");
        } else if !visible {
            debug!("scene suspended");
        }
        resumed
    }

    /// Stop the loop and release every backend resource. Safe to call repeatedly.
    pub fn detach(&mut self) {
        let Some(scene) = self.attached.take() else {
            return;
        };

        self.frame_loop.stop();
        for mesh in &scene.meshes {
            self.backend.release_geometry(mesh.geometry_handle);
            self.backend.release_material(mesh.material_handle);
        }
        self.backend.release();
        info!("scene detached, released {} meshes", scene.meshes.len());
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.is_attached() && self.frame_loop.should_run()
    }

    pub fn mesh_count(&self) -> usize {
        self.attached.as_ref().map_or(0, |scene| scene.meshes.len())
    }

    pub fn meshes(&self) -> &[AccentMesh] {
        self.attached
            .as_ref()
            .map_or(&[][..], |scene| scene.meshes.as_slice())
    }

    pub fn mesh(&self, id: MeshId) -> Option<&AccentMesh> {
        self.meshes().get(id.0)
    }

    pub fn hovered(&self) -> Option<MeshId> {
        self.attached.as_ref().and_then(|scene| scene.hovered)
    }

    pub fn camera(&self) -> Option<&SceneCamera> {
        self.attached.as_ref().map(|scene| &scene.camera)
    }

    pub fn lights(&self) -> Option<&SceneLights> {
        self.attached.as_ref().map(|scene| &scene.lights)
    }

    pub fn profile(&self) -> Option<&DeviceProfile> {
        self.attached.as_ref().map(|scene| &scene.profile)
    }

    pub fn surface(&self) -> Option<&SurfaceBox> {
        self.attached.as_ref().map(|scene| &scene.surface)
    }

    pub fn target(&self) -> &CameraTarget {
        &self.target
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame_loop.frame_count()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: RenderBackend> Drop for SceneController<B> {
    fn drop(&mut self) {
        self.detach();
    }
}
