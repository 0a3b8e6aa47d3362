use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::CameraSettings;
use crate::core::clock::{TIME_SCALE_MAX, TIME_SCALE_MIN};
use crate::types::ProjectionSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "flycam".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    pub time_scale_min: f64,
    pub time_scale_max: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            time_scale_min: TIME_SCALE_MIN,
            time_scale_max: TIME_SCALE_MAX,
        }
    }
}

/// Everything the viewer can be configured with; missing fields take their defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub clock: ClockSettings,
    pub projection: ProjectionSettings,
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("Invalid settings file: {:?}", path))?;
        log::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            bail!("window size must be non-zero, got {}x{}", window.width, window.height);
        }

        let camera = &self.camera;
        let finite = camera
            .position
            .iter()
            .chain(camera.world_up.iter())
            .chain([
                &camera.yaw,
                &camera.pitch,
                &camera.movement_speed,
                &camera.mouse_sensitivity,
                &camera.zoom,
                &camera.min_zoom,
                &camera.max_zoom,
            ])
            .all(|v| v.is_finite());
        if !finite {
            bail!("camera settings must be finite numbers");
        }
        if glam::Vec3::from_array(camera.world_up).length_squared() == 0.0 {
            bail!("camera world_up must not be the zero vector");
        }
        if camera.min_zoom <= 0.0 || camera.min_zoom > camera.max_zoom {
            bail!(
                "zoom range must satisfy 0 < min_zoom <= max_zoom, got [{}, {}]",
                camera.min_zoom,
                camera.max_zoom
            );
        }

        let clock = &self.clock;
        if !(clock.time_scale_min > 0.0 && clock.time_scale_min.is_finite()) {
            bail!("time_scale_min must be positive, got {}", clock.time_scale_min);
        }
        if !(clock.time_scale_max >= clock.time_scale_min && clock.time_scale_max.is_finite()) {
            bail!(
                "time_scale_max must be at least time_scale_min ({}), got {}",
                clock.time_scale_min,
                clock.time_scale_max
            );
        }

        let projection = &self.projection;
        if !(projection.near > 0.0 && projection.far > projection.near && projection.far.is_finite()) {
            bail!(
                "projection planes must satisfy 0 < near < far, got near={} far={}",
                projection.near,
                projection.far
            );
        }

        Ok(())
    }
}
