//! Recording [`GlApi`] used by unit tests.
//!
//! Handles are plain `u32`s from a single counter. Every driver method appends
//! its name to a call log; failures are scripted up front with the builder
//! methods (`fail_compile`, `fail_link`, `fail_call`, `refuse_create`).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::geometry::VertexAttribute;

use super::{GlApi, ShaderStage};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum Object {
    Shader,
    Program,
    VertexArray,
    Buffer,
}

#[derive(Default)]
struct State {
    next_id: u32,
    calls: Vec<&'static str>,
    pending_error: u32,

    created: Vec<(Object, u32)>,
    deleted: Vec<(Object, u32)>,
    stages: HashMap<u32, ShaderStage>,
    sources: HashMap<u32, String>,
    attached: Vec<(u32, u32)>,
    current_program: Option<u32>,
    bound_vertex_array: Option<u32>,

    uploaded: Vec<u8>,
    attributes: Vec<(VertexAttribute, i32)>,
    enabled: Vec<u32>,
    viewport: Option<(i32, i32)>,
    clear_color: Option<[f32; 4]>,
    clears: usize,
    draws: Vec<(i32, i32)>,

    failing_stage: Option<(ShaderStage, String)>,
    failing_link: Option<String>,
    failing_call: Option<(&'static str, u32)>,
    refused: Option<Object>,
}

#[derive(Default)]
pub(crate) struct MockGl {
    state: RefCell<State>,
}

impl MockGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Shaders of `stage` fail to compile with `log` as their info log.
    pub(crate) fn fail_compile(self, stage: ShaderStage, log: &str) -> Self {
        self.state.borrow_mut().failing_stage = Some((stage, log.to_string()));
        self
    }

    /// Programs fail to link with `log` as their info log.
    pub(crate) fn fail_link(self, log: &str) -> Self {
        self.state.borrow_mut().failing_link = Some(log.to_string());
        self
    }

    /// The first call to `method` raises `code` for the next `get_error`.
    pub(crate) fn fail_call(self, method: &'static str, code: u32) -> Self {
        self.state.borrow_mut().failing_call = Some((method, code));
        self
    }

    /// Constructors for `object` return no handle.
    pub(crate) fn refuse_create(self, object: Object) -> Self {
        self.state.borrow_mut().refused = Some(object);
        self
    }

    // ── inspection ────────────────────────────────────────────────────────

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn created(&self, object: Object) -> Vec<u32> {
        ids_of(&self.state.borrow().created, object)
    }

    pub(crate) fn deleted(&self, object: Object) -> Vec<u32> {
        ids_of(&self.state.borrow().deleted, object)
    }

    pub(crate) fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.state.borrow().stages.get(&shader).copied()
    }

    pub(crate) fn source_of(&self, shader: u32) -> Option<String> {
        self.state.borrow().sources.get(&shader).cloned()
    }

    pub(crate) fn attached_to(&self, program: u32) -> Vec<u32> {
        let state = self.state.borrow();
        state
            .attached
            .iter()
            .filter(|(p, _)| *p == program)
            .map(|(_, s)| *s)
            .collect()
    }

    pub(crate) fn current_program(&self) -> Option<u32> {
        self.state.borrow().current_program
    }

    pub(crate) fn bound_vertex_array(&self) -> Option<u32> {
        self.state.borrow().bound_vertex_array
    }

    pub(crate) fn uploaded(&self) -> Vec<u8> {
        self.state.borrow().uploaded.clone()
    }

    pub(crate) fn attributes(&self) -> Vec<(VertexAttribute, i32)> {
        self.state.borrow().attributes.clone()
    }

    pub(crate) fn enabled_attributes(&self) -> Vec<u32> {
        self.state.borrow().enabled.clone()
    }

    pub(crate) fn viewport_size(&self) -> Option<(i32, i32)> {
        self.state.borrow().viewport
    }

    pub(crate) fn clear_color_value(&self) -> Option<[f32; 4]> {
        self.state.borrow().clear_color
    }

    pub(crate) fn clears(&self) -> usize {
        self.state.borrow().clears
    }

    pub(crate) fn draws(&self) -> Vec<(i32, i32)> {
        self.state.borrow().draws.clone()
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn record(&self, method: &'static str) {
        let mut state = self.state.borrow_mut();
        state.calls.push(method);
        if let Some((failing, code)) = state.failing_call {
            if failing == method {
                state.pending_error = code;
                state.failing_call = None;
            }
        }
    }

    fn create(&self, method: &'static str, object: Object) -> Result<u32, String> {
        self.record(method);
        let mut state = self.state.borrow_mut();
        if state.refused == Some(object) {
            return Err(format!("{object:?} creation refused"));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.created.push((object, id));
        Ok(id)
    }

    fn delete(&self, method: &'static str, object: Object, id: u32) {
        self.record(method);
        self.state.borrow_mut().deleted.push((object, id));
    }
}

fn ids_of(entries: &[(Object, u32)], object: Object) -> Vec<u32> {
    entries
        .iter()
        .filter(|(o, _)| *o == object)
        .map(|(_, id)| *id)
        .collect()
}

impl GlApi for MockGl {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Buffer = u32;

    fn get_error(&self) -> u32 {
        std::mem::take(&mut self.state.borrow_mut().pending_error)
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.create("create_shader", Object::Shader)?;
        self.state.borrow_mut().stages.insert(id, stage);
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record("shader_source");
        self.state.borrow_mut().sources.insert(shader, source.to_string());
    }

    fn compile_shader(&self, _shader: u32) {
        self.record("compile_shader");
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.record("shader_compile_status");
        let state = self.state.borrow();
        match (&state.failing_stage, state.stages.get(&shader)) {
            (Some((failing, _)), Some(stage)) => failing != stage,
            _ => true,
        }
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        self.record("shader_info_log");
        let state = self.state.borrow();
        state.failing_stage.as_ref().map(|(_, log)| log.clone()).unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.delete("delete_shader", Object::Shader, shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        self.create("create_program", Object::Program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record("attach_shader");
        self.state.borrow_mut().attached.push((program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record("detach_shader");
        self.state.borrow_mut().attached.retain(|&entry| entry != (program, shader));
    }

    fn link_program(&self, _program: u32) {
        self.record("link_program");
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.record("program_link_status");
        self.state.borrow().failing_link.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.record("program_info_log");
        self.state.borrow().failing_link.clone().unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record("use_program");
        self.state.borrow_mut().current_program = program;
    }

    fn delete_program(&self, program: u32) {
        self.delete("delete_program", Object::Program, program);
        let mut state = self.state.borrow_mut();
        if state.current_program == Some(program) {
            state.current_program = None;
        }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        self.create("create_vertex_array", Object::VertexArray)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record("bind_vertex_array");
        self.state.borrow_mut().bound_vertex_array = vertex_array;
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.delete("delete_vertex_array", Object::VertexArray, vertex_array);
    }

    fn create_buffer(&self) -> Result<u32, String> {
        self.create("create_buffer", Object::Buffer)
    }

    fn bind_array_buffer(&self, _buffer: Option<u32>) {
        self.record("bind_array_buffer");
    }

    fn array_buffer_data(&self, data: &[u8]) {
        self.record("array_buffer_data");
        self.state.borrow_mut().uploaded = data.to_vec();
    }

    fn vertex_attrib_pointer(&self, attribute: &VertexAttribute, stride: i32) {
        self.record("vertex_attrib_pointer");
        self.state.borrow_mut().attributes.push((*attribute, stride));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record("enable_vertex_attrib_array");
        self.state.borrow_mut().enabled.push(location);
    }

    fn delete_buffer(&self, buffer: u32) {
        self.delete("delete_buffer", Object::Buffer, buffer);
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record("viewport");
        self.state.borrow_mut().viewport = Some((width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record("clear_color");
        self.state.borrow_mut().clear_color = Some(rgba);
    }

    fn clear_color_buffer(&self) {
        self.record("clear_color_buffer");
        self.state.borrow_mut().clears += 1;
    }

    fn draw_triangle_fan(&self, first: i32, count: i32) {
        self.record("draw_triangle_fan");
        self.state.borrow_mut().draws.push((first, count));
    }
}
