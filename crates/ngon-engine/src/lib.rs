//! ngon engine crate.
//!
//! Geometry, shader pipeline and render state for a hue-wheel polygon, plus
//! the winit + glutin runtime that hosts them.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod geometry;
pub mod gl;
pub mod scene;

pub use glow;
