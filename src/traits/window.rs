/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height (minimized window) reports 1.0
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Window lifecycle abstraction - the side effects the loop driver needs
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Replace the title bar text
    fn set_title(&self, title: &str);

    /// Hide and lock the cursor, or release it
    fn set_cursor_captured(&self, captured: bool);

    /// Request the window to redraw
    fn request_redraw(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(WindowDimensions::new(1280, 720).aspect_ratio(), 1280.0 / 720.0);
        assert_eq!(WindowDimensions::new(640, 640).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_aspect_ratio_zero_height() {
        assert_eq!(WindowDimensions::new(800, 0).aspect_ratio(), 1.0);
    }
}
