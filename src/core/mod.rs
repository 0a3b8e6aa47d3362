pub mod clock;
pub mod controller;
pub mod fps;
pub mod input_adapter;

pub use clock::{FrameClock, WallClock};
pub use controller::Button;
pub use fps::FpsMeter;
pub use input_adapter::WinitInput;
