use crate::geometry::{PolygonMesh, Vertex};

use super::guard::Transient;
use super::{check, GlApi, GlError};

/// GPU-side copy of a polygon mesh: one vertex array and one vertex buffer.
///
/// Created once from a [`PolygonMesh`]; must be released with
/// [`MeshBuffers::delete`] while the context is still current.
pub struct MeshBuffers<G: GlApi> {
    vao: G::VertexArray,
    vbo: G::Buffer,
    vertex_count: i32,
}

impl<G: GlApi> MeshBuffers<G> {
    /// Creates the VAO/VBO pair, uploads the vertices and describes the
    /// interleaved `position`/`color` attributes.
    ///
    /// The VAO stays bound on return.
    pub fn upload(gl: &G, mesh: &PolygonMesh) -> Result<Self, GlError> {
        // PolygonMesh caps corners well below i32::MAX.
        let vertex_count = mesh.vertex_count() as i32;

        let vao = gl
            .create_vertex_array()
            .map_err(|message| GlError::Create { call: "glGenVertexArrays", message })?;
        let vao = Transient::new(gl, vao, G::delete_vertex_array);
        check(gl, "glGenVertexArrays")?;

        gl.bind_vertex_array(Some(vao.raw()));
        check(gl, "glBindVertexArray")?;

        let vbo = gl
            .create_buffer()
            .map_err(|message| GlError::Create { call: "glGenBuffers", message })?;
        let vbo = Transient::new(gl, vbo, G::delete_buffer);
        check(gl, "glGenBuffers")?;

        gl.bind_array_buffer(Some(vbo.raw()));
        check(gl, "glBindBuffer")?;

        gl.array_buffer_data(mesh.as_bytes());
        check(gl, "glBufferData")?;

        let [position, color] = Vertex::ATTRIBUTES;
        gl.vertex_attrib_pointer(&position, Vertex::STRIDE);
        check(gl, "glVertexAttribPointer [position]")?;
        gl.vertex_attrib_pointer(&color, Vertex::STRIDE);
        check(gl, "glVertexAttribPointer [color]")?;

        gl.enable_vertex_attrib_array(position.location);
        check(gl, "glEnableVertexAttribArray [position]")?;
        gl.enable_vertex_attrib_array(color.location);
        check(gl, "glEnableVertexAttribArray [color]")?;

        log::debug!(
            "uploaded {} vertices ({} bytes)",
            vertex_count,
            mesh.as_bytes().len()
        );

        Ok(Self {
            vao: vao.release(),
            vbo: vbo.release(),
            vertex_count,
        })
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Draws the whole mesh as a triangle fan.
    pub fn draw(&self, gl: &G) -> Result<(), GlError> {
        gl.draw_triangle_fan(0, self.vertex_count);
        check(gl, "glDrawArrays")
    }

    /// Deletes the VAO and the VBO. Both deletions are attempted; the first
    /// error is returned.
    pub fn delete(self, gl: &G) -> Result<(), GlError> {
        gl.delete_vertex_array(self.vao);
        let vao = check(gl, "glDeleteVertexArrays");
        gl.delete_buffer(self.vbo);
        let vbo = check(gl, "glDeleteBuffers");
        vao.and(vbo)
    }
}
