//! Capability probes for importability checks.
//!
//! A [`CapabilityProbe`] tries to exercise a dependency and reports whether
//! it loaded, without any other side effect. Probes are looked up by name in
//! a [`ProbeRegistry`]; `python` and `command` are built in.
//!
//! # Example
//!
//! ```
//! use preflight::checks::probe::{ProbeRegistry, BUILTIN_PROBES};
//! use preflight::config::Settings;
//!
//! let registry = ProbeRegistry::with_builtins(&Settings::default());
//! for name in BUILTIN_PROBES {
//!     assert!(registry.get(name).is_some());
//! }
//! ```

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use super::environment::Environment;
use super::error::{CheckError, Outcome};
use super::paths::{expand_home, resolve_against};
use crate::config::Settings;

/// Probe that imports a Python module.
pub const PYTHON_PROBE: &str = "python";

/// Probe that looks an executable up on PATH.
pub const COMMAND_PROBE: &str = "command";

/// Names of the probes every registry starts with.
pub const BUILTIN_PROBES: &[&str] = &[PYTHON_PROBE, COMMAND_PROBE];

static MODULE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("module id pattern is valid")
});

/// Whether `module` is a dotted Python identifier such as `agent.utils`.
pub fn is_valid_module_id(module: &str) -> bool {
    MODULE_ID.is_match(module)
}

/// What a probe may look at.
pub struct ProbeContext<'a> {
    /// Working directory for child processes.
    pub project_root: &'a Path,
    /// Variables visible to checks.
    pub env: &'a Environment,
}

/// Attempts to load a dependency.
pub trait CapabilityProbe: Send + Sync {
    /// Registry name.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// Try to load `target`.
    fn probe(&self, target: &str, ctx: &ProbeContext<'_>) -> Result<Outcome, CheckError>;
}

/// Imports a module with an external Python interpreter.
///
/// Runs `<interpreter> -c "import <module>"` in the project root with the
/// configured directories prepended to `PYTHONPATH`. Env-file variables are
/// passed to the child; the verifier's own environment is left alone.
#[derive(Debug, Clone)]
pub struct PythonModuleProbe {
    interpreter: String,
    python_path: Vec<String>,
}

impl PythonModuleProbe {
    pub fn new(interpreter: impl Into<String>, python_path: Vec<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            python_path,
        }
    }

    fn interpreter_path(&self, root: &Path) -> PathBuf {
        let expanded = expand_home(&self.interpreter);
        // Bare names go through PATH lookup; relative paths anchor at the root.
        if expanded.components().count() > 1 {
            resolve_against(root, &expanded)
        } else {
            expanded
        }
    }

    fn pythonpath(&self, ctx: &ProbeContext<'_>) -> Result<OsString, std::env::JoinPathsError> {
        let mut entries: Vec<PathBuf> = self
            .python_path
            .iter()
            .map(|p| resolve_against(ctx.project_root, &expand_home(p)))
            .collect();
        if let Some(existing) = ctx.env.get("PYTHONPATH") {
            entries.extend(std::env::split_paths(existing));
        }
        std::env::join_paths(entries)
    }
}

impl CapabilityProbe for PythonModuleProbe {
    fn name(&self) -> &str {
        PYTHON_PROBE
    }

    fn description(&self) -> &str {
        "import a Python module with the configured interpreter"
    }

    fn probe(&self, module: &str, ctx: &ProbeContext<'_>) -> Result<Outcome, CheckError> {
        let failure = |message: String| CheckError::ImportFailure {
            module: module.to_string(),
            message,
        };

        if !is_valid_module_id(module) {
            return Err(failure("not a valid module identifier".to_string()));
        }

        let pythonpath = self
            .pythonpath(ctx)
            .map_err(|e| failure(format!("invalid PYTHONPATH entry: {}", e)))?;

        let interpreter = self.interpreter_path(ctx.project_root);
        let mut cmd = Command::new(&interpreter);
        cmd.arg("-c")
            .arg(format!("import {}", module))
            .current_dir(ctx.project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        for (key, value) in ctx.env.file_vars() {
            cmd.env(key, value);
        }
        cmd.env("PYTHONPATH", pythonpath);

        tracing::debug!("Probing {} with {}", module, interpreter.display());

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                failure(format!("interpreter '{}' not found", self.interpreter))
            } else {
                failure(format!("failed to run '{}': {}", self.interpreter, e))
            }
        })?;

        if output.status.success() {
            return Ok(Outcome::new(format!(
                "{} imported with {}",
                module, self.interpreter
            )));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = last_line(&stderr)
            .map(String::from)
            .unwrap_or_else(|| format!("{} exited with {}", self.interpreter, output.status));
        Err(failure(message))
    }
}

/// Last non-blank line, which for a Python traceback is the exception.
fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|l| !l.is_empty())
}

/// Finds an executable on PATH.
#[derive(Debug, Clone, Default)]
pub struct CommandProbe;

impl CapabilityProbe for CommandProbe {
    fn name(&self) -> &str {
        COMMAND_PROBE
    }

    fn description(&self) -> &str {
        "find an executable on PATH"
    }

    fn probe(&self, tool: &str, ctx: &ProbeContext<'_>) -> Result<Outcome, CheckError> {
        let expanded = expand_home(tool);
        if expanded.components().count() > 1 {
            let path = resolve_against(ctx.project_root, &expanded);
            return if path.is_file() && is_executable(&path) {
                Ok(Outcome::new(format!("found at {}", path.display())))
            } else {
                Err(CheckError::ImportFailure {
                    module: tool.to_string(),
                    message: format!("{} is not an executable file", path.display()),
                })
            };
        }

        let path_entries: Vec<PathBuf> = ctx
            .env
            .get("PATH")
            .map(|p| std::env::split_paths(p).collect())
            .unwrap_or_default();

        match resolve_tool_path(tool, &path_entries) {
            Some(path) => Ok(Outcome::new(format!("found at {}", path.display()))),
            None => Err(CheckError::ImportFailure {
                module: tool.to_string(),
                message: "not found on PATH".to_string(),
            }),
        }
    }
}

/// Check if a path is executable (Unix: any execute bit set).
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary by walking PATH entries in order.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let candidates: Vec<String> = if cfg!(windows) {
        vec![tool.to_string(), format!("{}.exe", tool)]
    } else {
        vec![tool.to_string()]
    };

    path_entries.iter().find_map(|dir| {
        candidates
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    })
}

/// Registry of named capability probes.
pub struct ProbeRegistry {
    probes: HashMap<String, Box<dyn CapabilityProbe>>,
}

impl ProbeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            probes: HashMap::new(),
        }
    }

    /// Create a registry with the built-in probes configured from `settings`.
    pub fn with_builtins(settings: &Settings) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PythonModuleProbe::new(
            settings.interpreter.clone(),
            settings.python_path.clone(),
        )));
        registry.register(Box::new(CommandProbe));
        registry
    }

    /// Register a probe, replacing any with the same name.
    pub fn register(&mut self, probe: Box<dyn CapabilityProbe>) {
        self.probes.insert(probe.name().to_string(), probe);
    }

    /// Look up a probe by name.
    pub fn get(&self, name: &str) -> Option<&dyn CapabilityProbe> {
        self.probes.get(name).map(|p| p.as_ref())
    }

    /// All probes, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CapabilityProbe> {
        let mut probes: Vec<_> = self.probes.values().map(|p| p.as_ref()).collect();
        probes.sort_by(|a, b| a.name().cmp(b.name()));
        probes.into_iter()
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
