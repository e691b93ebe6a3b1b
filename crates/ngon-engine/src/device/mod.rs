//! OpenGL context + window surface management.
//!
//! This module is responsible for:
//! - picking a framebuffer config and creating the window through glutin
//! - creating an OpenGL core context and making it current
//! - loading the `glow` function table
//! - resizing the surface and presenting frames

mod gl_device;
mod init;

pub use gl_device::GlDevice;
pub use init::GlInit;
