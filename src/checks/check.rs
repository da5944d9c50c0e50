//! Check definitions.
//!
//! A [`Check`] names one precondition, what kind of probe verifies it,
//! and how seriously to take a failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Severity of a failing check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; the run may proceed.
    Warning,
    /// Blocks the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Structured data format understood by parsed-file checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    /// Guess the format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DataFormat::Json,
            _ => DataFormat::Yaml,
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Yaml => write!(f, "YAML"),
            DataFormat::Json => write!(f, "JSON"),
        }
    }
}

/// What a check probes.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    /// Variable is set; optionally its value names an existing path.
    EnvVar {
        var: String,
        expects_path: bool,
        secret: bool,
    },
    /// KEY=value file exists and is readable.
    EnvFile { path: PathBuf },
    /// TCP connect succeeds within `timeout`.
    Port {
        host: String,
        port: u16,
        timeout: Duration,
    },
    /// Path exists.
    FileExists {
        path: String,
        anchor_env: Option<String>,
    },
    /// Path exists and parses as `format`.
    ParsedFile { path: String, format: DataFormat },
    /// `module` is loadable through the named capability probe.
    Importable { module: String, probe: String },
}

impl CheckKind {
    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::EnvVar { .. } => "env_var",
            CheckKind::EnvFile { .. } => "env_file",
            CheckKind::Port { .. } => "port",
            CheckKind::FileExists { .. } => "file_exists",
            CheckKind::ParsedFile { .. } => "parsed_file",
            CheckKind::Importable { .. } => "importable",
        }
    }

    /// The thing being checked, for listings.
    pub fn target(&self) -> String {
        match self {
            CheckKind::EnvVar { var, .. } => var.clone(),
            CheckKind::EnvFile { path } => path.display().to_string(),
            CheckKind::Port { host, port, .. } => format!("{}:{}", host, port),
            CheckKind::FileExists { path, .. } | CheckKind::ParsedFile { path, .. } => {
                path.clone()
            }
            CheckKind::Importable { module, probe } => format!("{} ({})", module, probe),
        }
    }
}

/// A named precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    /// Human-readable name.
    pub name: String,
    /// Heading this check is grouped under.
    pub section: Option<String>,
    /// What to probe.
    pub kind: CheckKind,
    /// Severity reported when the check fails.
    pub severity: Severity,
    /// Remediation hints shown under a failure.
    pub hints: Vec<String>,
}

impl Check {
    /// Create a check that is an error when it fails.
    pub fn new(name: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            name: name.into(),
            section: None,
            kind,
            severity: Severity::Error,
            hints: Vec::new(),
        }
    }

    /// Set the failure severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Group under a section heading.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Add a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Check that `var` is set.
    pub fn env_var(var: impl Into<String>) -> Self {
        let var = var.into();
        Self::new(
            var.clone(),
            CheckKind::EnvVar {
                var,
                expects_path: false,
                secret: false,
            },
        )
    }

    /// Check that `var` is set and names an existing path.
    pub fn env_path(var: impl Into<String>) -> Self {
        let var = var.into();
        Self::new(
            var.clone(),
            CheckKind::EnvVar {
                var,
                expects_path: true,
                secret: false,
            },
        )
    }

    /// Check that `host:port` accepts a TCP connection.
    pub fn port(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        let host = host.into();
        Self::new(
            format!("{}:{}", host, port),
            CheckKind::Port {
                host,
                port,
                timeout,
            },
        )
    }

    /// Check that `path` exists.
    pub fn file_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            path.clone(),
            CheckKind::FileExists {
                path,
                anchor_env: None,
            },
        )
    }

    /// Check that `path` exists and parses as `format`.
    pub fn parsed_file(path: impl Into<String>, format: DataFormat) -> Self {
        let path = path.into();
        Self::new(path.clone(), CheckKind::ParsedFile { path, format })
    }

    /// Check that `module` loads through `probe`.
    pub fn importable(module: impl Into<String>, probe: impl Into<String>) -> Self {
        let module = module.into();
        Self::new(
            module.clone(),
            CheckKind::Importable {
                module,
                probe: probe.into(),
            },
        )
    }
}
