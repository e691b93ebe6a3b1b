//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the OpenGL device.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
