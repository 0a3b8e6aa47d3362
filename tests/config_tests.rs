use flycam::camera::CameraSettings;
use flycam::config::Settings;
use flycam::core::clock::TIME_SCALE_MIN;
use flycam::{AppState, FreeFlyCamera};
use glam::Vec3;

#[cfg(test)]
mod load_tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("flycam-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_full_file() {
        let path = temp_file(
            "full",
            r#"{
                "window": { "width": 800, "height": 600, "title": "demo" },
                "camera": { "position": [1.0, 2.0, 3.0], "movement_speed": 5.0, "zoom": 30.0 },
                "clock": { "time_scale_max": 4.0 },
                "projection": { "near": 0.5, "far": 50.0 }
            }"#,
        );

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.window.title, "demo");
        assert_eq!(settings.camera.position, [1.0, 2.0, 3.0]);
        assert_eq!(settings.camera.movement_speed, 5.0);
        assert_eq!(settings.clock.time_scale_max, 4.0);
        assert_eq!(settings.clock.time_scale_min, TIME_SCALE_MIN);
        assert_eq!(settings.projection.far, 50.0);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("here.json"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let path = temp_file("malformed", "{ window: ");
        let result = Settings::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = Settings::default();
        let text = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&text).unwrap(), settings);
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn invalid(edit: impl FnOnce(&mut Settings)) -> bool {
        let mut settings = Settings::default();
        edit(&mut settings);
        settings.validate().is_err()
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(invalid(|s| s.window.width = 0));
        assert!(invalid(|s| s.camera.min_zoom = 0.0));
        assert!(invalid(|s| s.camera.min_zoom = 50.0));
        assert!(invalid(|s| s.camera.world_up = [0.0, 0.0, 0.0]));
        assert!(invalid(|s| s.camera.yaw = f32::NAN));
        assert!(invalid(|s| s.clock.time_scale_min = -1.0));
        assert!(invalid(|s| s.clock.time_scale_max = 1e-9));
        assert!(invalid(|s| s.projection.near = 0.0));
        assert!(invalid(|s| s.projection.far = 0.05));
    }

    #[test]
    fn test_accepts_custom_ranges() {
        assert!(!invalid(|s| {
            s.camera.min_zoom = 10.0;
            s.camera.max_zoom = 90.0;
            s.camera.zoom = 60.0;
            s.clock.time_scale_max = 10.0;
        }));
    }
}

#[cfg(test)]
mod settings_application_tests {
    use super::*;

    #[test]
    fn test_camera_built_from_settings() {
        let settings = CameraSettings {
            position: [5.0, 1.0, 0.0],
            yaw: 180.0,
            min_zoom: 10.0,
            max_zoom: 90.0,
            zoom: 60.0,
            ..CameraSettings::default()
        };
        let mut camera = FreeFlyCamera::with_settings(&settings);

        assert_eq!(camera.position(), Vec3::new(5.0, 1.0, 0.0));
        assert!(camera.front().abs_diff_eq(Vec3::NEG_X, 1e-4));

        camera.process_zoom_delta(-100.0);
        assert_eq!(camera.zoom(), 90.0);
        camera.process_zoom_delta(100.0);
        assert_eq!(camera.zoom(), 10.0);
    }

    #[test]
    fn test_app_uses_clock_bounds() {
        let mut settings = Settings::default();
        settings.clock.time_scale_max = 3.0;
        let app = AppState::new(&settings);

        assert_eq!(app.clock().time_scale_max(), 3.0);
        assert_eq!(app.clock().time_scale(), 1.0);
    }
}
