use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;

/// Owns the OpenGL context, the window surface and the loaded function table.
///
/// This type is the low-level rendering context:
/// - creates the window together with a matching framebuffer config
/// - creates a core-profile context and keeps it current on this thread
/// - resizes the surface and swaps buffers
///
/// The window is returned separately and must outlive the device.
pub struct GlDevice {
    /// Function table bound to `context`.
    gl: glow::Context,

    /// Double-buffered surface of the window.
    surface: Surface<WindowSurface>,

    /// Context, current on the event-loop thread.
    context: PossiblyCurrentContext,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl GlDevice {
    /// Creates a window plus a current OpenGL context rendering into it.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: GlInit,
    ) -> Result<(Window, Self)> {
        let GlInit { version, vsync, samples } = init;

        let mut template = ConfigTemplateBuilder::new().with_alpha_size(8);
        if samples > 0 {
            template = template.with_multisampling(samples);
        }

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes.clone()))
            .build(event_loop, template, |configs| {
                // glutin only calls the picker with a non-empty list.
                pick_config(configs, samples).expect("glutin offered no framebuffer config")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

        log::debug!(
            "framebuffer config: {} samples, alpha {}",
            config.num_samples(),
            config.alpha_size()
        );

        let raw_window_handle = window
            .as_ref()
            .and_then(|w| w.window_handle().ok())
            .map(|h| h.as_raw());

        let display = config.display();
        let (major, minor) = version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(raw_window_handle);

        // SAFETY: the raw window handle (if any) belongs to `window`, which
        // outlives the context.
        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} core context"))?;

        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, attributes, &config)
                .context("failed to create window")?,
        };

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("window has no usable native handle")?;

        // SAFETY: same as above; the surface is dropped before the window.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make the OpenGL context current")?;

        let interval = if vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        // SAFETY: the context was made current on this thread just above.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
        };

        // SAFETY: context is current; VERSION is a valid string query.
        let gl_version = unsafe { gl.get_parameter_string(glow::VERSION) };
        let size = window.inner_size();
        log::info!("OpenGL {gl_version} ({}x{})", size.width, size.height);

        Ok((
            window,
            GlDevice {
                gl,
                surface,
                context,
                size,
            },
        ))
    }

    /// Returns the function table for the current context.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the surface after a window resize.
    ///
    /// A 0x0 size (minimized window) only updates internal state.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;

        let (Some(width), Some(height)) =
            (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, width, height);
    }

    /// Swaps front and back buffers.
    pub fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>, samples: u8) -> Option<Config> {
    configs.reduce(|best, candidate| {
        let better = if samples > 0 {
            candidate.num_samples() > best.num_samples()
        } else {
            candidate.num_samples() < best.num_samples()
        };
        if better { candidate } else { best }
    })
}
