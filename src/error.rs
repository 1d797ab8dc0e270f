//! Error types for pipstrap operations.
//!
//! This module defines [`PipstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The two fatal conditions (bad project path, unsupported Python major
//!   version) get their own variants and propagate untouched to `main`
//! - Use `anyhow::Error` (via `PipstrapError::Other`) for unexpected errors
//! - Everything else (unreadable file mid-scan, unmatched import line, pip
//!   exiting nonzero) is deliberately skipped rather than reported

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pipstrap operations.
#[derive(Debug, Error)]
pub enum PipstrapError {
    /// The project directory given on the command line does not exist.
    #[error("Project path not found: {path}")]
    ProjectPathNotFound { path: PathBuf },

    /// The probed interpreter reported a major version we cannot install for.
    #[error("Unsupported Python major version: {version} (expected 2 or 3)")]
    UnsupportedPythonVersion { version: u32 },

    /// No usable Python interpreter could be executed.
    #[error("Failed to probe Python interpreter '{interpreter}': {message}")]
    InterpreterProbeFailed {
        interpreter: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipstrap operations.
pub type Result<T> = std::result::Result<T, PipstrapError>;
