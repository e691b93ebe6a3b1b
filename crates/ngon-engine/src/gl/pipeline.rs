use super::guard::Transient;
use super::{
    check, compile, CompiledShader, Diagnostic, GlApi, GlError, PipelineError, ShaderSources,
    ShaderStage,
};

/// Progress of a [`ShaderPipeline`].
///
/// `Idle → VertexCompiled → FragmentCompiled → Linked → Active`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PipelineState {
    Idle,
    VertexCompiled,
    FragmentCompiled,
    Linked,
    Active,
}

/// Builds one shader program: vertex compile, fragment compile, link, use.
///
/// Compiled shader objects live only inside the builder. `link` detaches and
/// deletes both of them whatever the link outcome; dropping the builder early
/// deletes whatever was compiled so far.
pub struct ShaderPipeline<'g, G: GlApi> {
    gl: &'g G,
    state: PipelineState,
    vertex: Option<CompiledShader<'g, G>>,
    fragment: Option<CompiledShader<'g, G>>,
}

impl<'g, G: GlApi> ShaderPipeline<'g, G> {
    pub fn new(gl: &'g G) -> Self {
        Self {
            gl,
            state: PipelineState::Idle,
            vertex: None,
            fragment: None,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn compile_vertex(&mut self, source: &str) -> Result<(), PipelineError> {
        self.expect(PipelineState::Idle, "compile the vertex shader")?;
        log::info!("compiling vertex shader");
        self.vertex = Some(compile(self.gl, ShaderStage::Vertex, source)?);
        self.state = PipelineState::VertexCompiled;
        Ok(())
    }

    pub fn compile_fragment(&mut self, source: &str) -> Result<(), PipelineError> {
        self.expect(PipelineState::VertexCompiled, "compile the fragment shader")?;
        log::info!("compiling fragment shader");
        self.fragment = Some(compile(self.gl, ShaderStage::Fragment, source)?);
        self.state = PipelineState::FragmentCompiled;
        Ok(())
    }

    /// Links both compiled stages into a program and makes it current.
    ///
    /// The returned handle is owned by the caller, who must delete it.
    pub fn link(&mut self) -> Result<G::Program, PipelineError> {
        self.expect(PipelineState::FragmentCompiled, "link")?;
        let (Some(vertex), Some(fragment)) = (self.vertex.take(), self.fragment.take()) else {
            return Err(PipelineError::OutOfOrder { action: "link", state: self.state });
        };

        log::info!("creating shader program");
        let gl = self.gl;

        let raw = gl
            .create_program()
            .map_err(|message| GlError::Create { call: "glCreateProgram", message })?;
        let program = Transient::new(gl, raw, G::delete_program);
        check(gl, "glCreateProgram")?;

        gl.attach_shader(raw, vertex.raw());
        check(gl, "glAttachShader [vertex]")?;
        gl.attach_shader(raw, fragment.raw());
        check(gl, "glAttachShader [fragment]")?;

        gl.link_program(raw);
        check(gl, "glLinkProgram")?;

        gl.detach_shader(raw, vertex.raw());
        check(gl, "glDetachShader [vertex]")?;
        gl.detach_shader(raw, fragment.raw());
        check(gl, "glDetachShader [fragment]")?;

        vertex.object.delete("glDeleteShader [vertex]")?;
        fragment.object.delete("glDeleteShader [fragment]")?;

        let linked = gl.program_link_status(raw);
        check(gl, "glGetProgramiv")?;

        if !linked {
            let info = gl.program_info_log(raw);
            check(gl, "glGetProgramInfoLog")?;
            if let Err(e) = program.delete("glDeleteProgram") {
                log::warn!("failed to delete unlinked program: {e}");
            }
            return Err(PipelineError::Link { diagnostic: Diagnostic::from_log(info) });
        }
        self.state = PipelineState::Linked;

        gl.use_program(Some(raw));
        check(gl, "glUseProgram")?;
        self.state = PipelineState::Active;

        log::debug!("shader program {raw:?} active");
        Ok(program.release())
    }

    fn expect(&self, state: PipelineState, action: &'static str) -> Result<(), PipelineError> {
        if self.state == state {
            Ok(())
        } else {
            Err(PipelineError::OutOfOrder { action, state: self.state })
        }
    }
}

/// Compiles, links and activates a program from `sources`.
pub fn build_program<G: GlApi>(
    gl: &G,
    sources: &ShaderSources,
) -> Result<G::Program, PipelineError> {
    let mut pipeline = ShaderPipeline::new(gl);
    pipeline.compile_vertex(&sources.vertex)?;
    pipeline.compile_fragment(&sources.fragment)?;
    pipeline.link()
}
