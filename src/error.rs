//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the error type for everything
//! outside a single check (loading config, writing files, CLI plumbing),
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures found *by* a check are not errors here. They are
//!   [`CheckError`](crate::checks::CheckError) values that the runner turns
//!   into failing results.
//! - Use `PreflightError` for problems that stop the verifier itself
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
