use winit::window::{Window, WindowId};

use crate::scene::Viewport;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the drawable size in physical pixels.
    pub fn framebuffer_size(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height)
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Context passed to every `core::App` callback.
///
/// The OpenGL context behind `gl` is current for the duration of the call.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub gl: &'a glow::Context,
    /// Drawable size tracked by the device (physical pixels).
    pub viewport: Viewport,
    /// Number of frames presented so far.
    pub frame_index: u64,
}
