use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use flycam::cli::Cli;
use flycam::config::Settings;
use flycam::core::{FpsMeter, WallClock, WinitInput};
use flycam::traits::{InputSource, WindowContext};
use flycam::window::Window;
use flycam::AppState;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    settings: Settings,
    no_ui: bool,
    window: Option<Window>,
    state: AppState,
    input: WinitInput,
    wall_clock: WallClock,
    fps: FpsMeter,
}

impl App {
    fn new(settings: Settings, no_ui: bool) -> Self {
        Self {
            state: AppState::new(&settings),
            settings,
            no_ui,
            window: None,
            input: WinitInput::new(),
            wall_clock: WallClock::new(),
            fps: FpsMeter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        let was_captured = self.state.input_captured();
        let snapshot = self.input.poll();
        let aspect = window.dimensions().aspect_ratio();
        let output = self.state.update(&snapshot, self.wall_clock.now(), aspect);

        if self.state.should_exit() {
            event_loop.exit();
            return;
        }
        if self.state.input_captured() != was_captured {
            window.set_cursor_captured(self.state.input_captured());
        }

        if !self.no_ui {
            if let Some(fps) = self.fps.tick(output.info.real_delta as f32) {
                log::info!("FPS: {:.1} | {}", fps, self.state.status_line());
            }
            window.set_title(&format!("{} | {}", self.settings.window.title, self.state.status_line()));
        }

        // Rendering is left to the embedding application; trace what it would receive
        log::trace!(
            "frame {} view={:?} zoom={:.1}",
            output.info.number,
            output.view,
            output.zoom
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WinitWindow::default_attributes()
            .with_title(self.settings.window.title.clone())
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Window::new(Arc::new(w)),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        window.set_cursor_captured(self.state.input_captured());
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => self.input.process_event(&event),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    log::info!(
        "Window {}x{}, time scale range [{}, {}]",
        settings.window.width,
        settings.window.height,
        settings.clock.time_scale_min,
        settings.clock.time_scale_max
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, cli.no_ui);

    log::info!(
        "Controls: WASD move, mouse look, wheel zoom, C capture, Space pause, arrows time scale, Escape quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
