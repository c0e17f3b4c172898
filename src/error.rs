//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Most findings in envcheck are not errors at all: unparsable lines and
//! heuristic warnings are recorded as issues and reported, never raised.
//! `EnvcheckError` covers only the conditions that end a run early.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// An environment file was located but could not be read.
    ///
    /// Covers permission errors and the race where the file disappears
    /// between the existence check and the read.
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
