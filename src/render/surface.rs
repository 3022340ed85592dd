use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use log::info;
use winit::window::Window;

use super::scene_pass::{attachment, ScenePass};
use crate::math::Rgb;

/// egui integration state for the window
struct Overlay {
    ctx: egui::Context,
    input: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Window presenter: the scene frame as a fullscreen texture, egui on top
pub struct SurfaceRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    scene: ScenePass,
    overlay: Overlay,
}

impl SurfaceRenderer {
    pub async fn new(window: Arc<Window>, background: Rgb) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("creating window surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(|e| anyhow!("no suitable GPU adapter: {:?}", e))?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("portfolio"),
                ..Default::default()
            })
            .await
            .context("requesting GPU device")?;

        let config = surface_config(&surface, &adapter, window.inner_size())?;
        surface.configure(&device, &config);

        let scene = ScenePass::new(&device, config.format);

        let ctx = egui::Context::default();
        let overlay = Overlay {
            input: egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            ),
            renderer: egui_wgpu::Renderer::new(&device, config.format, Default::default()),
            ctx,
        };

        info!(
            "surface ready: {}x{} {:?}",
            config.width, config.height, config.format
        );

        let mut renderer = Self {
            device,
            queue,
            surface,
            config,
            scene,
            overlay,
        };
        renderer.upload_scene(&background.to_rgba8(), 1, 1)?;
        Ok(renderer)
    }

    pub fn egui_ctx(&self) -> &egui::Context {
        &self.overlay.ctx
    }

    /// Feed a window event to egui
    pub fn handle_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> egui_winit::EventResponse {
        self.overlay.input.on_window_event(window, event)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a scene frame (RGBA8). The texture follows the frame size.
    pub fn upload_scene(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<()> {
        self.scene
            .upload(&self.device, &self.queue, pixels, width, height)
    }

    /// Present the scene texture and run one egui pass on top of it
    pub fn render(
        &mut self,
        window: &Window,
        run_ui: impl FnMut(&egui::Context),
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let target = output.texture.create_view(&Default::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("portfolio frame"),
            });

        self.scene.draw(&mut encoder, &target);

        let Overlay {
            ctx,
            input,
            renderer,
        } = &mut self.overlay;

        let ui = ctx.run(input.take_egui_input(window), run_ui);
        input.handle_platform_output(window, ui.platform_output);

        let meshes = ctx.tessellate(ui.shapes, ui.pixels_per_point);
        for (id, delta) in &ui.textures_delta.set {
            renderer.update_texture(&self.device, &self.queue, *id, delta);
        }
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: ui.pixels_per_point,
        };
        let callbacks =
            renderer.update_buffers(&self.device, &self.queue, &mut encoder, &meshes, &screen);

        {
            // egui-wgpu wants a 'static pass
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui overlay"),
                    color_attachments: &[attachment(&target, false)],
                    ..Default::default()
                })
                .forget_lifetime();
            renderer.render(&mut pass, &meshes, &screen);
        }

        for id in &ui.textures_delta.free {
            renderer.free_texture(id);
        }

        self.queue
            .submit(callbacks.into_iter().chain(Some(encoder.finish())));
        output.present();
        Ok(())
    }
}

fn surface_config(
    surface: &wgpu::Surface,
    adapter: &wgpu::Adapter,
    size: winit::dpi::PhysicalSize<u32>,
) -> Result<wgpu::SurfaceConfiguration> {
    let caps = surface.get_capabilities(adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| anyhow!("surface reports no texture formats"))?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    })
}
