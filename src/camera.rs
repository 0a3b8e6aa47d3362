use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Pitch stops short of the poles so `front` never becomes parallel to `world_up`
pub const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement requests understood by the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Construction parameters for a [`FreeFlyCamera`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Euler-angle free-fly camera
///
/// `front`, `right` and `up` are derived from `yaw`, `pitch` and `world_up`
/// and are refreshed every time an angle changes. Angles are in degrees.
#[derive(Debug, Clone)]
pub struct FreeFlyCamera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl FreeFlyCamera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn with_settings(settings: &CameraSettings) -> Self {
        let (min_zoom, max_zoom) = if settings.min_zoom.is_nan() || settings.max_zoom.is_nan() {
            (MIN_ZOOM, MAX_ZOOM)
        } else {
            (
                settings.min_zoom.min(settings.max_zoom),
                settings.max_zoom.max(settings.min_zoom),
            )
        };

        let mut camera = Self::new(
            Vec3::from_array(settings.position),
            Vec3::from_array(settings.world_up),
            settings.yaw,
            settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        );
        camera.movement_speed = settings.movement_speed;
        camera.mouse_sensitivity = settings.mouse_sensitivity;
        camera.min_zoom = min_zoom;
        camera.max_zoom = max_zoom;
        camera.zoom = settings.zoom.clamp(min_zoom, max_zoom);
        camera
    }

    /// World-to-eye transform (right-handed, column-major)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a pointer offset; positive `y_offset` looks up
    pub fn process_look(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Positive offsets (wheel away from the user) narrow the field of view
    pub fn process_zoom_delta(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(self.min_zoom, self.max_zoom);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }
}

impl Default for FreeFlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}
