//! Read-only view of the variables checks can see.
//!
//! An [`Environment`] is a snapshot of the process environment, optionally
//! overlaid with values from a KEY=value file. Variables already set in the
//! process win over the file. The process environment itself is never
//! modified.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::paths::resolve_against;
use crate::config::{EnvFileParser, Settings};

/// What happened when the env file was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// Loaded with this many variables.
    Loaded { path: PathBuf, count: usize },
    /// No file at the path.
    Missing { path: PathBuf },
    /// File exists but could not be read.
    Unreadable { path: PathBuf, message: String },
}

impl EnvFileStatus {
    /// Path the env file was loaded from.
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded { path, .. }
            | Self::Missing { path }
            | Self::Unreadable { path, .. } => path,
        }
    }
}

/// Variables visible to checks.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    process: HashMap<String, String>,
    file: HashMap<String, String>,
    env_file: Option<EnvFileStatus>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars().collect())
    }

    /// Build from an explicit variable map.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self {
            process: vars,
            ..Default::default()
        }
    }

    /// Snapshot the process environment plus the configured env file.
    pub fn for_settings(project_root: &Path, settings: &Settings) -> Self {
        let env = Self::from_process();
        match &settings.env_file {
            Some(path) => env.with_env_file(&resolve_against(project_root, path)),
            None => env,
        }
    }

    /// Overlay a KEY=value file, loaded once.
    ///
    /// A missing or unreadable file is recorded, never fatal.
    pub fn with_env_file(mut self, path: &Path) -> Self {
        let status = match EnvFileParser::load_optional(path) {
            Ok(Some(vars)) => {
                let count = vars.len();
                self.file = vars;
                EnvFileStatus::Loaded {
                    path: path.to_path_buf(),
                    count,
                }
            }
            Ok(None) => EnvFileStatus::Missing {
                path: path.to_path_buf(),
            },
            Err(e) => EnvFileStatus::Unreadable {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            },
        };

        match &status {
            EnvFileStatus::Loaded { path, count } => {
                tracing::debug!("Loaded {} variables from {}", count, path.display())
            }
            EnvFileStatus::Missing { path } => {
                tracing::debug!("No env file at {}", path.display())
            }
            EnvFileStatus::Unreadable { path, message } => {
                tracing::warn!("Could not read env file {}: {}", path.display(), message)
            }
        }

        self.env_file = Some(status);
        self
    }

    /// Look up a variable. Empty values count as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.process
            .get(name)
            .or_else(|| self.file.get(name))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Variables that came from the env file and are not shadowed by the
    /// process environment.
    pub fn file_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.file
            .iter()
            .filter(|(k, _)| !self.process.contains_key(*k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Result of loading the env file, if one was requested.
    pub fn env_file_status(&self) -> Option<&EnvFileStatus> {
        self.env_file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_reads_explicit_vars() {
        let env = Environment::from_vars(vars(&[("APP_PATH", "/opt/app")]));
        assert_eq!(env.get("APP_PATH"), Some("/opt/app"));
        assert_eq!(env.get("OTHER"), None);
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let env = Environment::from_vars(vars(&[("APP_PATH", "")]));
        assert_eq!(env.get("APP_PATH"), None);
    }

    #[test]
    fn env_file_fills_gaps_but_process_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "FROM_FILE=file\nSHARED=file\n").unwrap();

        let env = Environment::from_vars(vars(&[("SHARED", "process")])).with_env_file(&path);

        assert_eq!(env.get("FROM_FILE"), Some("file"));
        assert_eq!(env.get("SHARED"), Some("process"));
        assert_eq!(
            env.env_file_status(),
            Some(&EnvFileStatus::Loaded {
                path: path.clone(),
                count: 2
            })
        );
        let file_only: Vec<_> = env.file_vars().collect();
        assert_eq!(file_only, vec![("FROM_FILE", "file")]);
    }

    #[test]
    fn missing_env_file_is_recorded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env").join(".env");

        let env = Environment::from_vars(HashMap::new()).with_env_file(&path);

        assert!(matches!(env.env_file_status(), Some(EnvFileStatus::Missing { .. })));
    }

    #[test]
    fn no_env_file_requested() {
        let env = Environment::from_vars(HashMap::new());
        assert!(env.env_file_status().is_none());
    }
}
