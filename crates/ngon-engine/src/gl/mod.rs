//! OpenGL plumbing: shader pipeline and mesh buffers.
//!
//! All driver access goes through the narrow [`GlApi`] trait so the pipeline
//! logic can be exercised without a context. [`glow::Context`] implements it
//! for real rendering.
//!
//! Convention: every driver call is followed by an error check tagged with the
//! GL entry point it corresponds to (`"glAttachShader [vertex]"`, ...).

mod api;
mod buffers;
mod error;
mod glow_backend;
mod guard;
mod pipeline;
mod shader;
mod source;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{check, GlApi};
pub use buffers::MeshBuffers;
pub use error::{Diagnostic, GlError, IoStep, PipelineError};
pub(crate) use guard::Transient;
pub use pipeline::{build_program, PipelineState, ShaderPipeline};
pub use shader::{compile, CompiledShader, ShaderStage};
pub use source::{read_shader_source, ShaderSources};
