//! Error types for DocPress.
//!
//! Library crates use [`DocPressError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all DocPress operations.
///
/// Every error is fatal for the run: the pipeline stops at the first
/// failure and leaves the output tree as-is, partially updated.
#[derive(Debug, thiserror::Error)]
pub enum DocPressError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The configured scan root does not exist.
    #[error("source directory not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Filesystem I/O error during export or post-processing.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The external compiler could not be started at all.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The external compiler exited with a non-zero status.
    #[error("'{program}' failed on {file:?} with exit code {code:?}")]
    Compiler {
        program: String,
        file: PathBuf,
        code: Option<i32>,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocPressError>;

impl DocPressError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a missing-scan-root error.
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a spawn error for the given external program.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a non-zero-exit error for the given program and input file.
    pub fn compiler(
        program: impl Into<String>,
        file: impl Into<PathBuf>,
        code: Option<i32>,
    ) -> Self {
        Self::Compiler {
            program: program.into(),
            file: file.into(),
            code,
        }
    }
}
