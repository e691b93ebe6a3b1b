use std::path::PathBuf;

/// Scene parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Number of polygon corners (at least 3).
    pub corners: u32,

    /// Directory holding `vertex.glsl` and `fragment.glsl`.
    pub shader_dir: PathBuf,

    /// Background color (straight RGBA in [0, 1]).
    pub clear_color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            corners: 6,
            shader_dir: PathBuf::from("shader"),
            clear_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

impl SceneConfig {
    pub fn with_corners(mut self, corners: u32) -> Self {
        self.corners = corners;
        self
    }

    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = dir.into();
        self
    }
}
