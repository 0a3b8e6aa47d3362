// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flycam")]
#[command(about = "Free-fly camera viewer with scalable simulation time", long_about = None)]
pub struct Cli {
    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Camera movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Degrees of rotation per unit of pointer motion
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Upper bound for the simulation time scale
    #[arg(long = "time-scale-max")]
    pub time_scale_max: Option<f64>,

    /// Disable the title-bar status and console FPS output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Settings from the config file (or defaults) with command-line overrides applied
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(width) = self.width {
            settings.window.width = width;
        }
        if let Some(height) = self.height {
            settings.window.height = height;
        }
        if let Some(speed) = self.speed {
            settings.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = self.sensitivity {
            settings.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(max) = self.time_scale_max {
            settings.clock.time_scale_max = max;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from(["flycam", "--width", "800", "--speed", "5", "--no-ui"]);
        assert_eq!(cli.width, Some(800));
        assert!(cli.no_ui);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.camera.movement_speed, 5.0);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["flycam", "--height", "0"]);
        assert!(cli.settings().is_err());
    }
}
