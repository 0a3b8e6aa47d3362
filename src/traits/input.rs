use crate::core::controller::Button;

/// Per-frame view of the input devices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Buttons down at poll time
    pub held: Vec<Button>,
    /// Buttons that went down since the previous poll
    pub pressed: Vec<Button>,
    /// Accumulated pointer motion, x right and y down
    pub look: (f32, f32),
    /// Accumulated vertical wheel motion in lines
    pub scroll: f32,
}

impl InputSnapshot {
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

/// Input polling abstraction - the render loop reads one snapshot per frame
pub trait InputSource {
    /// Take a snapshot and clear the per-frame accumulators
    fn poll(&mut self) -> InputSnapshot;
}
