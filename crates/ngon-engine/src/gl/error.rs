use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ShaderStage;

/// Driver-level failure.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GlError {
    /// `glGetError` reported a non-zero code after `call`.
    #[error("GLError: {call} ({code:#06x})")]
    Driver { call: &'static str, code: u32 },

    /// An object constructor returned no handle.
    #[error("{call} failed: {message}")]
    Create { call: &'static str, message: String },
}

/// Host I/O step that failed while loading shader sources.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IoStep {
    Open,
    Read,
}

impl fmt::Display for IoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoStep::Open => f.write_str("Failed to open file."),
            IoStep::Read => f.write_str("Failed to read file."),
        }
    }
}

/// Compiler or linker output attached to a failed build step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Diagnostic {
    Log(String),
    /// The driver produced no log text.
    Unavailable,
}

impl Diagnostic {
    /// Wraps a driver info log; an empty log (length <= 1 counting the NUL)
    /// becomes [`Diagnostic::Unavailable`].
    pub fn from_log(log: String) -> Self {
        if log.trim().is_empty() {
            Diagnostic::Unavailable
        } else {
            Diagnostic::Log(log)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Log(text) => f.write_str(text.trim_end()),
            Diagnostic::Unavailable => f.write_str("No info log from the shader compiler"),
        }
    }
}

/// Failure while building the shader program.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{step} ({})", .path.display())]
    Io {
        step: IoStep,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Gl(#[from] GlError),

    #[error("Error compiling shader ({stage}): {diagnostic}")]
    Compile {
        stage: ShaderStage,
        diagnostic: Diagnostic,
    },

    #[error("Error linking shader program: {diagnostic}")]
    Link { diagnostic: Diagnostic },

    /// Builder steps were invoked in the wrong order.
    #[error("cannot {action} while the pipeline is {state:?}")]
    OutOfOrder {
        action: &'static str,
        state: super::PipelineState,
    },
}
