/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub zoom: f32, // Field of view in degrees
}

/// Perspective projection parameters; the field of view comes from the camera zoom
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl ProjectionSettings {
    /// OpenGL-style right-handed perspective for a vertical fov in degrees
    pub fn matrix(&self, fov_degrees: f32, aspect: f32) -> glam::Mat4 {
        glam::Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}
