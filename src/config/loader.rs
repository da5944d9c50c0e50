//! Configuration file discovery and loading.

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding preflight configuration inside a project.
pub const CONFIG_DIR: &str = ".preflight";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.preflight` directory (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into a [`PreflightConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PreflightConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreflightError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PreflightError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`PreflightConfig`].
///
/// An empty document yields the default (empty) configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PreflightConfig> {
    if content.trim().is_empty() {
        return Ok(PreflightConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PreflightError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// A relative override is resolved against the project root.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PreflightConfig> {
    let path = match config_override {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => project_root.join(p),
        None => default_config_path(project_root),
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_under_config_dir() {
        let path = default_config_path(Path::new("/project"));
        assert_eq!(path, PathBuf::from("/project/.preflight/config.yml"));
    }

    #[test]
    fn find_project_root_prefers_config_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
        let nested = temp.path().join("agent").join("conf");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_falls_back_to_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("env");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn load_missing_config_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), None);
        assert!(matches!(result, Err(PreflightError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "sections: [unclosed").unwrap();

        let result = load_config(temp.path(), Some(Path::new("bad.yml")));
        match result {
            Err(PreflightError::ConfigParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn load_discovered_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            default_config_path(temp.path()),
            "app_name: StarDojo\nsections: []\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.app_name, Some("StarDojo".to_string()));
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("\n", Path::new("x.yml")).unwrap();
        assert!(config.sections.is_empty());
    }
}
