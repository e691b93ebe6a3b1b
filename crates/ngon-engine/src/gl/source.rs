use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{IoStep, PipelineError};

/// Reads a shader source file fully into memory.
pub fn read_shader_source(path: &Path) -> Result<String, PipelineError> {
    let mut file = File::open(path).map_err(|source| PipelineError::Io {
        step: IoStep::Open,
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|source| PipelineError::Io {
        step: IoStep::Read,
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Vertex + fragment source text for one program.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub const VERTEX_FILE: &'static str = "vertex.glsl";
    pub const FRAGMENT_FILE: &'static str = "fragment.glsl";

    /// Loads `vertex.glsl` and `fragment.glsl` from `dir`.
    ///
    /// Both files are read before any GL object is created, so a missing file
    /// never leaves driver state behind.
    pub fn load(dir: &Path) -> Result<Self, PipelineError> {
        let (vertex_path, fragment_path) = Self::paths(dir);
        Ok(Self {
            vertex: read_shader_source(&vertex_path)?,
            fragment: read_shader_source(&fragment_path)?,
        })
    }

    pub fn paths(dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join(Self::VERTEX_FILE), dir.join(Self::FRAGMENT_FILE))
    }
}
