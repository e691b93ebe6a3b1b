/// Initialization parameters for the OpenGL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested OpenGL version `(major, minor)`, core profile.
    ///
    /// The bundled shaders target GLSL 330, so 3.3 is the floor.
    pub version: (u8, u8),

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,

    /// Preferred multisample count; 0 picks the config with the fewest samples.
    pub samples: u8,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: true,
            samples: 0,
        }
    }
}
