//! [`GlApi`] for a live `glow` context.
//!
//! SAFETY (applies to every `unsafe` block below): a `glow::Context` is only
//! created by `device::GlDevice` after its GL context was made current on the
//! event-loop thread, and it is never sent to another thread. Handles passed in
//! were produced by this same context.

use glow::HasContext;

use crate::geometry::{AttribFormat, VertexAttribute};

use super::{GlApi, ShaderStage};

type Native = glow::Context;

impl GlApi for glow::Context {
    type Shader = <Native as HasContext>::Shader;
    type Program = <Native as HasContext>::Program;
    type VertexArray = <Native as HasContext>::VertexArray;
    type Buffer = <Native as HasContext>::Buffer;

    fn get_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data(&self, data: &[u8]) {
        unsafe { HasContext::buffer_data_u8_slice(self, glow::ARRAY_BUFFER, data, glow::STATIC_DRAW) }
    }

    fn vertex_attrib_pointer(&self, attribute: &VertexAttribute, stride: i32) {
        let data_type = match attribute.format {
            AttribFormat::F32 => glow::FLOAT,
            AttribFormat::U8 => glow::UNSIGNED_BYTE,
        };
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                attribute.location,
                attribute.components,
                data_type,
                attribute.normalized,
                stride,
                attribute.offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, location) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn viewport(&self, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, 0, 0, width, height) }
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear_color_buffer(&self) {
        unsafe { HasContext::clear(self, glow::COLOR_BUFFER_BIT) }
    }

    fn draw_triangle_fan(&self, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, glow::TRIANGLE_FAN, first, count) }
    }
}
