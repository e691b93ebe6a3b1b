use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{GlDevice, GlInit};
use crate::scene::Viewport;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ngon".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, drives `app` until the window closes, then returns.
    ///
    /// The first error produced by the device or by an app callback ends the
    /// loop and is returned once `on_exit` has run.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

// Field order matters: the device (surface + context) drops before the window.
struct WindowEntry {
    device: GlDevice,
    window: Window,
}

impl WindowEntry {
    fn frame_ctx(&self, frame_index: u64) -> FrameCtx<'_> {
        let size = self.device.size();
        FrameCtx {
            window: WindowCtx {
                id: self.window.id(),
                window: &self.window,
            },
            gl: self.device.gl(),
            viewport: Viewport::new(size.width, size.height),
            frame_index,
        }
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    entry: Option<WindowEntry>,
    frame_index: u64,
    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            entry: None,
            frame_index: 0,
            exit_requested: false,
            error: None,
        }
    }

    fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let (window, device) = GlDevice::new(event_loop, attrs, self.gl_init.clone())
            .context("failed to initialize OpenGL for window")?;

        let entry = self.entry.insert(WindowEntry { device, window });

        let mut ctx = entry.frame_ctx(self.frame_index);
        if let Err(e) = self.app.on_init(&mut ctx) {
            // `on_exit` only pairs with a successful `on_init`.
            self.entry = None;
            return Err(e);
        }

        if let Some(window) = entry_window(&self.entry) {
            window.request_redraw();
        }
        Ok(())
    }

    /// Records the first error and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        self.shutdown(event_loop);
    }

    /// Runs `on_exit` once, destroys the window and exits the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.teardown();
        self.exit_requested = true;
        event_loop.exit();
    }

    fn teardown(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };

        let mut ctx = entry.frame_ctx(self.frame_index);
        if let Err(e) = self.app.on_exit(&mut ctx) {
            log::error!("{e:#}");
            if self.error.is_none() {
                self.error = Some(e);
            }
        }

        log::debug!("window closed after {} frames", self.frame_index);
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };

        entry.device.resize(new_size);

        let mut ctx = entry.frame_ctx(self.frame_index);
        self.app.on_resize(&mut ctx)?;
        entry.window.request_redraw();
        Ok(())
    }

    fn redraw(&mut self) -> Result<AppControl> {
        let Some(entry) = self.entry.as_ref() else {
            return Ok(AppControl::Continue);
        };

        let mut ctx = entry.frame_ctx(self.frame_index);
        let control = self.app.on_frame(&mut ctx)?;

        entry.window.pre_present_notify();
        entry.device.present()?;
        self.frame_index += 1;

        Ok(control)
    }
}

fn entry_window(entry: &Option<WindowEntry>) -> Option<&Window> {
    entry.as_ref().map(|e| &e.window)
}

fn is_escape_press(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw, one frame per display refresh with vsync.
        if let Some(window) = entry_window(&self.entry) {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if entry_window(&self.entry).map(Window::id) != Some(window_id) {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::KeyboardInput { event, .. } if is_escape_press(&event) => {
                log::debug!("escape pressed");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Err(e) = self.resize(new_size) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let Some(new_size) = entry_window(&self.entry).map(Window::inner_size) else {
                    return;
                };
                if let Err(e) = self.resize(new_size) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.shutdown(event_loop),
                Err(e) => self.fail(event_loop, e),
            },

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Loop ended without a close request (e.g. platform shutdown).
        self.teardown();
    }
}
