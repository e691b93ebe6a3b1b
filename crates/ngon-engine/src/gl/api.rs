use std::fmt::Debug;

use crate::geometry::VertexAttribute;

use super::{GlError, ShaderStage};

/// Driver surface used by the pipeline, the mesh buffers and the scene.
///
/// Methods mirror single GL entry points. None of them report errors directly;
/// callers follow each one with [`check`], which reads `glGetError`.
///
/// Implementors must only be used on the thread where their context is current.
pub trait GlApi {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Buffer: Copy + Debug;

    /// Returns and clears the oldest pending error flag (`GL_NO_ERROR` is 0).
    fn get_error(&self) -> u32;

    // ── shaders ───────────────────────────────────────────────────────────
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── vertex state ──────────────────────────────────────────────────────
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the bound array buffer with static-draw usage.
    fn array_buffer_data(&self, data: &[u8]);
    fn vertex_attrib_pointer(&self, attribute: &VertexAttribute, stride: i32);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    // ── frame ─────────────────────────────────────────────────────────────
    fn viewport(&self, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear_color_buffer(&self);
    fn draw_triangle_fan(&self, first: i32, count: i32);
}

/// Converts a pending driver error into [`GlError::Driver`] tagged with `call`.
#[inline]
pub fn check<G: GlApi + ?Sized>(gl: &G, call: &'static str) -> Result<(), GlError> {
    match gl.get_error() {
        0 => Ok(()),
        code => Err(GlError::Driver { call, code }),
    }
}
