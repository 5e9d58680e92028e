//! Error types for pose-doctor operations.
//!
//! This module defines [`DoctorError`], the application-level error type,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never use `DoctorError`; each probe has its own typed
//!   error that is mapped to an [`Outcome`](crate::diagnostics::Outcome)
//!   inside the probe
//! - Use `DoctorError` for failures that happen before diagnostics start
//!   (configuration loading and validation)
//! - Use `anyhow::Error` (via `DoctorError::Other`) for I/O failures that
//!   only need a context message, such as an unreadable config file

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pose-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pose-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
