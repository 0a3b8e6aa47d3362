pub mod input;
pub mod window;

pub use input::*;
pub use window::*;
