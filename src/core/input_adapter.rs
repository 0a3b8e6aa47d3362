use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Button;
use crate::traits::input::{InputSnapshot, InputSource};

/// Pixel-precise wheels (touchpads) report pixels; this many make one line
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to the InputSource trait
#[derive(Debug, Clone)]
pub struct WinitInput {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Pressed buttons in press order
    pressed_vec: Vec<Button>,
    /// Buttons that went down since the last poll
    just_pressed: Vec<Button>,
    /// Raw pointer motion since the last poll
    mouse_delta: (f32, f32),
    /// Wheel lines since the last poll
    scroll_delta: f32,
}

impl WinitInput {
    /// Create a new WinitInput with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            just_pressed: Vec::new(),
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed if !event.repeat => self.press(button),
                            ElementState::Pressed => {}
                            ElementState::Released => self.release(button),
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll(*y),
                MouseScrollDelta::PixelDelta(pos) => self.scroll(pos.y as f32 / PIXELS_PER_LINE),
            },
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Process raw device motion; used for looking around while the cursor is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
            self.just_pressed.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    pub fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::Space => Some(Button::Space),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            _ => None,
        }
    }
}

impl Default for WinitInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for WinitInput {
    fn poll(&mut self) -> InputSnapshot {
        InputSnapshot {
            held: self.pressed_vec.clone(),
            pressed: std::mem::take(&mut self.just_pressed),
            look: std::mem::take(&mut self.mouse_delta),
            scroll: std::mem::take(&mut self.scroll_delta),
        }
    }
}
