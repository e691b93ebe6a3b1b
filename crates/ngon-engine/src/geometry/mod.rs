//! Procedural polygon geometry.
//!
//! Produces the triangle-fan vertex list for a regular N-gon:
//! - vertex 0 is the white center at the origin
//! - rim vertices sit on a circle of radius 0.5, colored by hue angle
//! - the last rim vertex repeats the first so the fan closes
//!
//! Everything here is pure CPU code; uploading lives in `gl`.

mod hue;
mod mesh;
mod vertex;

pub use hue::{calc_color, hue_to_rgb, Rgb8};
pub use mesh::{
    angle_step, calc_position, populate_mesh, GeometryError, PolygonMesh, MAX_CORNERS,
    MIN_CORNERS, RADIUS,
};
pub use vertex::{AttribFormat, Vertex, VertexAttribute, ATTRIB_COLOR, ATTRIB_POSITION};
