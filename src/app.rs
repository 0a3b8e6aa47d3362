use glam::{Mat4, Vec3};

use crate::camera::FreeFlyCamera;
use crate::config::Settings;
use crate::core::clock::FrameClock;
use crate::core::controller::Button;
use crate::frame::FrameInfo;
use crate::traits::input::InputSnapshot;
use crate::types::{CameraUniform, ProjectionSettings};

/// Time-scale steps for the arrow keys
pub const COARSE_TIME_STEP: f64 = 0.1;
pub const FINE_TIME_STEP: f64 = 0.01;

/// Everything the renderer needs from one loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub info: FrameInfo,
    pub view: Mat4,
    pub projection: Mat4,
    pub zoom: f32,
    pub position: Vec3,
}

impl FrameOutput {
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            position: self.position.to_array(),
            zoom: self.zoom,
        }
    }
}

/// Application state owned by the loop driver
///
/// Holds the camera, the simulation clock and the interaction flags; one
/// call to [`AppState::update`] per rendered frame.
#[derive(Debug, Clone)]
pub struct AppState {
    camera: FreeFlyCamera,
    clock: FrameClock,
    projection: ProjectionSettings,
    input_captured: bool,
    should_exit: bool,
    frame_number: u64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            camera: FreeFlyCamera::with_settings(&settings.camera),
            clock: FrameClock::new(settings.clock.time_scale_min, settings.clock.time_scale_max),
            projection: settings.projection,
            input_captured: true,
            should_exit: false,
            frame_number: 0,
        }
    }

    /// Run one frame: advance time, apply input, and produce the camera matrices
    pub fn update(&mut self, input: &InputSnapshot, wall_clock_now: f64, aspect: f32) -> FrameOutput {
        let delta = self.clock.tick(wall_clock_now);
        let recaptured = self.handle_actions(input);

        if self.input_captured {
            self.apply_movement(input);
            if !recaptured {
                self.apply_look(input.look);
            }
            self.camera.process_zoom_delta(input.scroll);
        }

        let output = FrameOutput {
            info: FrameInfo::new(
                self.frame_number,
                self.clock.sim_time(),
                delta,
                self.clock.real_delta(),
            ),
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(self.camera.zoom(), aspect),
            zoom: self.camera.zoom(),
            position: self.camera.position(),
        };
        self.frame_number += 1;
        output
    }

    /// Returns true when input capture was switched back on this frame
    fn handle_actions(&mut self, input: &InputSnapshot) -> bool {
        let mut recaptured = false;

        for &button in &input.pressed {
            match button {
                Button::Escape => self.should_exit = true,
                Button::KeyC => {
                    self.input_captured = !self.input_captured;
                    recaptured = self.input_captured;
                    log::debug!("Input captured: {}", self.input_captured);
                }
                Button::Space => {
                    self.clock.toggle_pause();
                    log::info!(
                        "{} (time scale {:.2})",
                        if self.clock.is_paused() { "Paused" } else { "Resumed" },
                        self.clock.time_scale()
                    );
                }
                Button::ArrowUp => self.adjust_time_scale(COARSE_TIME_STEP),
                Button::ArrowDown => self.adjust_time_scale(-COARSE_TIME_STEP),
                Button::ArrowRight => self.adjust_time_scale(FINE_TIME_STEP),
                Button::ArrowLeft => self.adjust_time_scale(-FINE_TIME_STEP),
                _ => {}
            }
        }

        recaptured
    }

    fn adjust_time_scale(&mut self, step: f64) {
        self.clock.adjust_time_scale(step);
        log::debug!("Time scale: {:.2}", self.clock.time_scale());
    }

    fn apply_movement(&mut self, input: &InputSnapshot) {
        // Flying uses wall time so the camera keeps its speed while the world is slowed
        let delta = self.clock.real_delta() as f32;
        for movement in input.held.iter().filter_map(|b| b.movement()) {
            self.camera.process_movement(movement, delta);
        }
    }

    fn apply_look(&mut self, (dx, dy): (f32, f32)) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        // Narrow fields of view turn slower
        let scale = self.camera.zoom() / self.camera.max_zoom();
        self.camera.process_look(dx * scale, -dy * scale, true);
    }

    /// Overlay text: simulated time, time scale and pause state
    pub fn status_line(&self) -> String {
        format!(
            "sim {:.2}s | scale {:.2}{} | fov {:.1}",
            self.clock.sim_time(),
            self.clock.time_scale(),
            if self.clock.is_paused() { " (paused)" } else { "" },
            self.camera.zoom()
        )
    }

    pub fn camera(&self) -> &FreeFlyCamera {
        &self.camera
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn input_captured(&self) -> bool {
        self.input_captured
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_counts_from_zero() {
        let mut app = AppState::new(&Settings::default());
        let out = app.update(&InputSnapshot::default(), 0.5, 1.0);
        assert_eq!(out.info.number, 0);
        assert_eq!(app.update(&InputSnapshot::default(), 1.0, 1.0).info.number, 1);
    }

    #[test]
    fn uniform_carries_frame_output() {
        let mut app = AppState::new(&Settings::default());
        let out = app.update(&InputSnapshot::default(), 0.0, 16.0 / 9.0);
        let uniform = out.to_uniform();

        assert_eq!(uniform.view, out.view.to_cols_array_2d());
        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.zoom, 45.0);
    }
}
