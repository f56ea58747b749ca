use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop a run before any tool is invoked.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),
}

/// Why a single tool invocation produced no usable result.
///
/// Every variant is recoverable: the pipeline records it as a report entry
/// and carries on with the next file or phase.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{program} is not installed or not on PATH")]
    Missing { program: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {detail}")]
    Exit {
        program: String,
        status: ExitStatusText,
        detail: String,
    },

    #[error("{program} produced unreadable output: {detail}")]
    Malformed { program: String, detail: String },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a version probe that did not succeed.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{program} is not installed or not on PATH")]
    Missing { program: String },

    #[error("{program} --version exited with {status}: {detail}")]
    Failed {
        program: String,
        status: ExitStatusText,
        detail: String,
    },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Printable exit status: a code, or "a signal" when the process was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusText(pub Option<i32>);

impl std::fmt::Display for ExitStatusText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(code) => write!(f, "status {code}"),
            None => f.write_str("a signal"),
        }
    }
}
