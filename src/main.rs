use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use dev_portfolio::channel::Subscription;
use dev_portfolio::cli::Cli;
use dev_portfolio::config::{load_config, AppConfig, LogLevel};
use dev_portfolio::content::{source_from_location, ContentService};
use dev_portfolio::page::PageLayout;
use dev_portfolio::render::{SoftwareBackend, SurfaceRenderer};
use dev_portfolio::scene::{SceneConfig, SceneController, SurfaceBox};
use dev_portfolio::view::{theme, PortfolioView};
use dev_portfolio::{ScrollTracker, SectionId};

const DEFAULT_LOG_FILTER: &str = "trace,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Everything that needs a window to exist
struct Surface {
    window: Arc<Window>,
    renderer: SurfaceRenderer,
}

struct App {
    config: AppConfig,
    tracker: ScrollTracker,
    page: PageLayout,
    view: PortfolioView,
    scene: Option<SceneController<SoftwareBackend>>,
    active_section: Subscription<SectionId>,
    surface: Option<Surface>,
    cursor: Option<PhysicalPosition<f64>>,
    last_frame: Instant,
}

impl App {
    fn new(config: AppConfig, content: ContentService) -> Self {
        let tracker = ScrollTracker::new(config.scroll_throttle());
        let view = PortfolioView::new(&content, &tracker, config.back_to_top_threshold);
        let active_section = tracker.active_section();
        let scene = config.enable_scene.then(|| {
            SceneController::new(
                SoftwareBackend::new(config.render_scale),
                SceneConfig {
                    user_agent: config.user_agent.clone(),
                    mobile_width: config.mobile_width_threshold as f32,
                    ..SceneConfig::default()
                },
            )
        });

        Self {
            page: PageLayout::new(config.window_height as f32),
            config,
            tracker,
            view,
            scene,
            active_section,
            surface: None,
            cursor: None,
            last_frame: Instant::now(),
        }
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Developer Portfolio")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window_width,
                        self.config.window_height,
                    )),
            )
            .context("creating window")?;
        let window = Arc::new(window);

        let background = SceneConfig::default().background;
        let renderer = pollster::block_on(SurfaceRenderer::new(window.clone(), background))
            .context("initializing surface renderer")?;
        theme::apply(renderer.egui_ctx());

        if let Some(scene) = self.scene.as_mut() {
            scene.attach(surface_box(&window));
        }

        self.surface = Some(Surface { window, renderer });
        Ok(())
    }

    fn logical_cursor(&self) -> Option<(f32, f32)> {
        let surface = self.surface.as_ref()?;
        let position = self.cursor?.to_logical::<f32>(surface.window.scale_factor());
        Some((position.x, position.y))
    }

    fn pointer_moved(&mut self) {
        let Some((x, y)) = self.logical_cursor() else {
            return;
        };
        let blocked = self.view.blocks_pointer(egui::pos2(x, y));
        if let Some(scene) = self.scene.as_mut() {
            match scene.surface().copied() {
                Some(surface) if !blocked => {
                    scene.pointer_move(x, y, &surface);
                }
                _ => scene.clear_hover(),
            }
        }
    }

    fn pointer_clicked(&mut self) {
        let Some((x, y)) = self.logical_cursor() else {
            return;
        };
        if self.view.blocks_pointer(egui::pos2(x, y)) {
            return;
        }
        if let Some(scene) = self.scene.as_mut() {
            if let Some(surface) = scene.surface().copied() {
                scene.pointer_click(x, y, &surface, &mut self.page);
            }
        }
    }

    fn resized(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.renderer.resize(size.width, size.height);
        let logical = size.to_logical::<f32>(surface.window.scale_factor());
        if let Some(scene) = self.scene.as_mut() {
            scene.resize(logical.width, logical.height);
        }
        // resize is not throttled
        self.tracker.recompute(&self.page);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.view.update(&self.page, delta, now);

        let Self {
            tracker,
            page,
            view,
            scene,
            active_section,
            surface,
            ..
        } = self;
        let Some(surface) = surface.as_mut() else {
            return;
        };

        if let Some(scene) = scene.as_mut() {
            if let Some(section) = active_section.latest() {
                scene.on_active_section_changed(Some(section));
            }
            if scene.frame() {
                let backend = scene.backend();
                let (width, height) = backend.dimensions();
                if let Err(e) = surface.renderer.upload_scene(backend.pixels(), width, height) {
                    warn!("Skipping scene frame: {:#}", e);
                }
            }
        }

        let result = surface
            .renderer
            .render(&surface.window, |ctx| view.show(ctx, page, tracker, now));
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = surface.window.inner_size();
                debug!("surface lost, reconfiguring at {}x{}", size.width, size.height);
                surface.renderer.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        info!("Shutting down");
        if let Some(scene) = self.scene.as_mut() {
            scene.detach();
        }
        self.view.dispose();
        self.active_section.unsubscribe();
        self.tracker.dispose();
        event_loop.exit();
    }
}

fn surface_box(window: &Window) -> SurfaceBox {
    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<f32>(scale);
    SurfaceBox::new(0.0, 0.0, size.width, size.height).with_pixel_ratio(scale as f32)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        if let Err(e) = self.create_surface(event_loop) {
            error!("Failed to start: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first; it never swallows resize or close
        if let Some(surface) = self.surface.as_mut() {
            let _ = surface.renderer.handle_event(&surface.window, &event);
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::Occluded(occluded) => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.set_visible(!occluded);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                self.pointer_moved();
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                if let Some(scene) = self.scene.as_mut() {
                    scene.clear_hover();
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.pointer_clicked(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(surface) = &self.surface {
            surface.window.request_redraw();
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
    log::set_max_level(LogLevel::Info.as_filter());
}

/// Config decides verbosity unless RUST_LOG is set
fn set_log_level(level: LogLevel) {
    if std::env::var_os("RUST_LOG").is_some() {
        log::set_max_level(log::LevelFilter::Trace);
        info!("RUST_LOG set, ignoring config log level");
        return;
    }
    log::set_max_level(level.as_filter());
    info!("Applied log level {} from config", level);
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = load_config(&cli.config);
    config.apply_cli(&cli);
    set_log_level(config.log_level);

    info!(
        "Starting portfolio: content={}, scene={}",
        config.content_source,
        if config.enable_scene { "on" } else { "off" }
    );

    let source = source_from_location(&config.content_source)
        .with_context(|| format!("opening content source {}", config.content_source))?;
    let content = ContentService::new(source);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, content);
    event_loop.run_app(&mut app)?;

    Ok(())
}
