//! Check failure taxonomy.
//!
//! Adapters report failures as [`CheckError`] values. None of them stop a
//! run: the runner records each one as a failing result with the check's
//! configured severity.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why a single check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A required environment variable is unset or empty.
    #[error("{var} not set")]
    MissingEnvVar { var: String },

    /// A path named by an environment variable does not exist.
    #[error("{var} points to {path}, which does not exist")]
    PathNotFound { var: String, path: PathBuf },

    /// A secret variable names a path that does not exist. The path is
    /// withheld.
    #[error("{var} points to a path that does not exist (value hidden)")]
    SecretPathNotFound { var: String },

    /// Nothing accepted a TCP connection.
    #[error("nothing listening on {host}:{port} ({reason}, timeout {}ms)", .timeout.as_millis())]
    PortUnreachable {
        host: String,
        port: u16,
        timeout: Duration,
        reason: String,
    },

    /// A required file is absent.
    #[error("file not found: {}", .path.display())]
    FileMissing { path: PathBuf },

    /// A file exists but could not be read or parsed.
    #[error("{} is not valid {format}: {message}", .path.display())]
    FileUnparsable {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// A module or tool could not be loaded.
    #[error("{module} import failed: {message}")]
    ImportFailure { module: String, message: String },
}

/// What a passing check found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Human-readable description of what was found.
    pub message: String,
    /// Derived count for diagnostic display.
    pub count: Option<usize>,
    /// Extra diagnostic lines.
    pub details: Vec<String>,
}

impl Outcome {
    /// Create an outcome with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Attach a derived count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attach a diagnostic line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}
