use std::fmt;

use super::guard::Transient;
use super::{check, Diagnostic, GlApi, GlError, PipelineError};

/// Programmable pipeline stage of a shader object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL shader type enum (`GL_VERTEX_SHADER` / `GL_FRAGMENT_SHADER`).
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Human-readable tag used in diagnostics.
    pub const fn tag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex shader",
            ShaderStage::Fragment => "Fragment shader",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A successfully compiled shader object.
///
/// The object is transient: it is deleted when dropped unless the pipeline
/// deletes it explicitly after linking.
pub struct CompiledShader<'g, G: GlApi> {
    pub(super) stage: ShaderStage,
    pub(super) object: Transient<'g, G, G::Shader>,
}

impl<G: GlApi> CompiledShader<'_, G> {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn raw(&self) -> G::Shader {
        self.object.raw()
    }
}

/// Creates a shader object for `stage`, submits `source` and compiles it.
///
/// On a failed compile the info log is captured as a [`Diagnostic`], the
/// shader object is deleted and [`PipelineError::Compile`] is returned.
pub fn compile<'g, G: GlApi>(
    gl: &'g G,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledShader<'g, G>, PipelineError> {
    let raw = gl
        .create_shader(stage)
        .map_err(|message| GlError::Create { call: "glCreateShader", message })?;
    let object = Transient::new(gl, raw, G::delete_shader);
    check(gl, "glCreateShader")?;

    gl.shader_source(raw, source);
    check(gl, "glShaderSource")?;

    gl.compile_shader(raw);
    check(gl, "glCompileShader")?;

    let compiled = gl.shader_compile_status(raw);
    check(gl, "glGetShaderiv")?;

    if compiled {
        log::debug!("{stage} compiled ({} bytes of source)", source.len());
        return Ok(CompiledShader { stage, object });
    }

    let info = gl.shader_info_log(raw);
    check(gl, "glGetShaderInfoLog")?;
    let diagnostic = Diagnostic::from_log(info);

    if let Err(e) = object.delete("glDeleteShader") {
        log::warn!("failed to delete rejected {stage}: {e}");
    }

    Err(PipelineError::Compile { stage, diagnostic })
}
