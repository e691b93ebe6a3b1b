//! Render state for the single polygon.
//!
//! `PolygonScene` owns every GPU handle the demo creates (program, vertex
//! array, vertex buffer) and is passed by reference to each entry point:
//! `init` once, `draw` per frame, `teardown` once at exit.

mod config;
mod polygon;
mod viewport;

pub use config::SceneConfig;
pub use polygon::{PolygonScene, SceneError};
pub use viewport::Viewport;
