use std::f32::consts::TAU;

use thiserror::Error;

use super::{calc_color, Rgb8, Vertex};

/// Smallest polygon that still encloses an area.
pub const MIN_CORNERS: u32 = 3;

/// Upper bound on corners; keeps the draw count well inside `i32`.
pub const MAX_CORNERS: u32 = 1 << 16;

/// Distance of every rim vertex from the center.
pub const RADIUS: f32 = 0.5;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least {MIN_CORNERS} corners (got {corners})")]
    TooFewCorners { corners: u32 },
    #[error("a polygon supports at most {MAX_CORNERS} corners (got {corners})")]
    TooManyCorners { corners: u32 },
}

/// Angle between two neighboring rim vertices, in radians.
#[inline]
pub fn angle_step(corners: u32) -> f32 {
    TAU / corners as f32
}

/// Rim position of the vertex at `index`, on the circle of radius [`RADIUS`].
#[inline]
pub fn calc_position(angle_step: f32, index: u32) -> [f32; 2] {
    let angle = angle_step * index as f32;
    [RADIUS * angle.cos(), RADIUS * angle.sin()]
}

/// Builds the triangle-fan vertex list for a regular polygon.
///
/// Layout: `[center, rim_0, rim_1, .., rim_{corners-1}, rim_0]`, so the list
/// holds `corners + 2` vertices. The closing vertex is a copy of `rim_0`, which
/// keeps the seam bit-exact.
pub fn populate_mesh(corners: u32) -> Result<Vec<Vertex>, GeometryError> {
    if corners < MIN_CORNERS {
        return Err(GeometryError::TooFewCorners { corners });
    }
    if corners > MAX_CORNERS {
        return Err(GeometryError::TooManyCorners { corners });
    }

    let step = angle_step(corners);
    let mut vertices = Vec::with_capacity(corners as usize + 2);

    vertices.push(Vertex::new([0.0, 0.0, 0.0], Rgb8::WHITE));
    vertices.extend((0..corners).map(|i| {
        let [x, y] = calc_position(step, i);
        Vertex::new([x, y, 0.0], calc_color(step, i))
    }));
    vertices.push(vertices[1]);

    Ok(vertices)
}

/// Host-side polygon mesh, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMesh {
    corners: u32,
    vertices: Vec<Vertex>,
}

impl PolygonMesh {
    pub fn new(corners: u32) -> Result<Self, GeometryError> {
        let vertices = populate_mesh(corners)?;
        log::debug!("generated {} vertices for a {corners}-gon", vertices.len());
        Ok(Self { corners, vertices })
    }

    pub fn corners(&self) -> u32 {
        self.corners
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices (always `corners + 2`).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw interleaved vertex bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn len(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn vertex_count_is_corners_plus_two() {
        for corners in [3, 4, 5, 6, 7, 12, 64, 361] {
            assert_eq!(populate_mesh(corners).unwrap().len(), corners as usize + 2);
        }
    }

    #[test]
    fn center_is_white_origin() {
        for corners in [3, 8, 100] {
            let mesh = populate_mesh(corners).unwrap();
            assert_eq!(mesh[0].position, [0.0, 0.0, 0.0]);
            assert_eq!(mesh[0].rgb(), Rgb8::WHITE);
        }
    }

    #[test]
    fn rim_vertices_lie_on_radius() {
        for corners in [3, 5, 16, 1000] {
            let mesh = populate_mesh(corners).unwrap();
            for (i, v) in mesh.iter().enumerate().skip(1) {
                assert!((len(v.position) - RADIUS).abs() < EPS, "corners {corners} vertex {i}");
                assert_eq!(v.position[2], 0.0);
            }
        }
    }

    #[test]
    fn fan_closes_on_first_rim_vertex() {
        for corners in [3, 4, 7, 33, 360] {
            let mesh = populate_mesh(corners).unwrap();
            let last = mesh.len() - 1;
            assert_eq!(mesh[1], mesh[last]);
        }
    }

    #[test]
    fn square_scenario() {
        let mesh = populate_mesh(4).unwrap();
        assert_eq!(mesh.len(), 6);
        assert!((angle_step(4) - FRAC_PI_2).abs() < EPS);
        assert_eq!(mesh[1].position, [0.5, 0.0, 0.0]);
        assert!((mesh[2].position[0]).abs() < EPS);
        assert!((mesh[2].position[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn first_rim_vertex_is_red() {
        let mesh = populate_mesh(9).unwrap();
        assert_eq!(mesh[1].rgb(), Rgb8::new(255, 0, 0));
    }

    #[test]
    fn rim_angles_increase_counter_clockwise() {
        let mesh = populate_mesh(8).unwrap();
        let angle = |v: &Vertex| v.position[1].atan2(v.position[0]).rem_euclid(TAU);
        for i in 2..mesh.len() - 1 {
            assert!(angle(&mesh[i]) > angle(&mesh[i - 1]));
        }
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn rejects_degenerate_corner_counts() {
        for corners in [0, 1, 2] {
            assert_eq!(populate_mesh(corners), Err(GeometryError::TooFewCorners { corners }));
        }
    }

    #[test]
    fn rejects_oversized_corner_counts() {
        let corners = MAX_CORNERS + 1;
        assert_eq!(populate_mesh(corners), Err(GeometryError::TooManyCorners { corners }));
    }

    // ── PolygonMesh ───────────────────────────────────────────────────────

    #[test]
    fn mesh_bytes_cover_every_vertex() {
        let mesh = PolygonMesh::new(5).unwrap();
        assert_eq!(mesh.corners(), 5);
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.as_bytes().len(), 7 * Vertex::STRIDE as usize);
    }
}
