//! Error types for depgate operations.
//!
//! This module defines [`GateError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `DependencyInstallFailed` is the only error the gate itself produces.
//!   Plan execution records it and moves on; it never aborts a run.
//! - Config errors propagate to the binary and end the process.
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// A dependency's installer ran (or tried to) and did not succeed.
    #[error("Installing '{identifier}' failed (exit code {code:?}): {message}")]
    DependencyInstallFailed {
        identifier: String,
        code: Option<i32>,
        message: String,
    },

    /// Plan file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse plan file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid plan structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
