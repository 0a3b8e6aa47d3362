use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::traits::window::{WindowContext, WindowDimensions};

/// Wrapper around winit Window implementing WindowContext
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }
}

impl WindowContext for Window {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn set_cursor_captured(&self, captured: bool) {
        let result = if captured {
            // Not every platform can lock the pointer in place
            self.inner
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.inner.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            log::warn!("Failed to change cursor grab: {}", e);
        }
        self.inner.set_cursor_visible(!captured);
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
