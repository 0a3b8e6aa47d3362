use crate::camera::CameraMovement;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyC,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Button {
    /// Movement bound to this button, if any
    pub const fn movement(self) -> Option<CameraMovement> {
        match self {
            Button::KeyW => Some(CameraMovement::Forward),
            Button::KeyS => Some(CameraMovement::Backward),
            Button::KeyA => Some(CameraMovement::Left),
            Button::KeyD => Some(CameraMovement::Right),
            _ => None,
        }
    }
}
