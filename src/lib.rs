pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod traits;
pub mod types;
pub mod window;

pub use app::{AppState, FrameOutput};
pub use camera::{CameraMovement, FreeFlyCamera};
pub use crate::core::clock::FrameClock;
