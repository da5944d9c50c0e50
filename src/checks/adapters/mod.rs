//! Check adapters, one per [`CheckKind`](super::CheckKind).
//!
//! Every adapter reads state and returns a verdict. None of them mutate the
//! environment they inspect, and any socket, file or child process they
//! open is released before they return.

pub mod env_file;
pub mod env_var;
pub mod file;
pub mod importable;
pub mod parsed_file;
pub mod port;

use std::path::{Path, PathBuf};

use super::environment::Environment;
use super::error::CheckError;
use super::paths::{expand_home, resolve_against};
use super::probe::ProbeRegistry;
use crate::config::resolve_with;

/// Everything an adapter may look at.
pub struct CheckContext<'a> {
    /// Root that relative paths resolve against.
    pub project_root: &'a Path,
    /// Variables visible to checks.
    pub env: &'a Environment,
    /// Capability probes for importable checks.
    pub probes: &'a ProbeRegistry,
}

impl CheckContext<'_> {
    /// Resolve a configured path: interpolate `${VAR}`, expand `~`, then
    /// anchor relative paths.
    ///
    /// Relative paths resolve against the project root, or, with
    /// `anchor_env`, against the directory containing the path stored in
    /// that variable.
    pub fn resolve_path(&self, raw: &str, anchor_env: Option<&str>) -> Result<PathBuf, CheckError> {
        let interpolated = resolve_with(raw, |name| self.env.get(name).map(String::from))
            .map_err(|var| CheckError::MissingEnvVar { var })?;
        let expanded = expand_home(&interpolated);

        let base = match anchor_env {
            Some(var) => {
                let anchor = self
                    .env
                    .get(var)
                    .ok_or_else(|| CheckError::MissingEnvVar {
                        var: var.to_string(),
                    })?;
                let anchor = resolve_against(self.project_root, &expand_home(anchor));
                anchor
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or(anchor)
            }
            None => self.project_root.to_path_buf(),
        };

        Ok(resolve_against(&base, &expanded))
    }
}
