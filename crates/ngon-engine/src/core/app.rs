use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Every callback runs on the event-loop thread with the OpenGL context
/// current. An `Err` ends the event loop; `on_exit` still runs afterwards
/// when `on_init` had succeeded.
pub trait App {
    /// Called once, after the window and context exist.
    fn on_init(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()>;

    /// Called for window events, before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called after the drawable was resized. `ctx.viewport` holds the new size.
    fn on_resize(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called once per rendered frame, before the buffers are swapped.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl>;

    /// Called once before the context is destroyed.
    fn on_exit(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }
}
