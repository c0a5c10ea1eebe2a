use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wirecube::cli::Cli;
use wirecube::core::{DisplayContext, FrameClock, Hud, SurfaceRenderer, WinitController};
use wirecube::sketches::{self, Sketch};

/// Seconds between FPS log/HUD refreshes.
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Window, GPU presentation, and HUD — everything that only exists once a
/// window does.
struct Gfx {
    window: Arc<Window>,
    renderer: SurfaceRenderer,
    hud: Hud,
}

struct App {
    cli: Cli,
    gfx: Option<Gfx>,
    sketch: Box<dyn Sketch>,
    controller: WinitController,
    clock: FrameClock,
    frame_count: u32,
    fps_timer: f32,
    fps: f32,
}

impl App {
    fn new(cli: Cli, sketch: Box<dyn Sketch>) -> Self {
        Self {
            cli,
            gfx: None,
            sketch,
            controller: WinitController::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps_timer: 0.0,
            fps: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_timer;
            log::debug!("fps: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        if self.gfx.is_none() {
            return;
        }

        let frame = self.clock.tick();
        self.update_fps(frame.delta);

        self.sketch.update(&frame, &mut self.controller);

        let Some(gfx) = &mut self.gfx else {
            return;
        };

        let (width, height) = gfx.renderer.dimensions();
        let canvas = self.sketch.render(&DisplayContext::new(width, height));

        let mut lines = self.sketch.hud_lines();
        lines.push(format!("{:.0} fps", self.fps));

        if let Err(e) = gfx
            .renderer
            .present(canvas.pixels(), &gfx.window, &mut gfx.hud, &lines)
        {
            log::error!("present failed: {e:#}");
        }

        self.controller.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(format!("wirecube — {}", self.cli.sketch))
            .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match SurfaceRenderer::new(window.clone()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let hud = Hud::new(&window, renderer.gpu(), renderer.surface_format());

        self.gfx = Some(Gfx {
            window,
            renderer,
            hud,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gfx) = &mut self.gfx {
            if gfx.hud.handle_event(&gfx.window, &event) {
                return;
            }
        }

        self.controller.process_event(&event);

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
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.gfx {
                    gfx.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let sketch = sketches::by_name(&cli.sketch)
        .with_context(|| format!("unknown sketch '{}'", cli.sketch))?;

    log::info!(
        "starting sketch '{}' — arrows: yaw/pitch, Q/E: roll, C: toggle cube/camera, R: reset",
        cli.sketch
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, sketch);
    event_loop.run_app(&mut app)?;

    Ok(())
}
