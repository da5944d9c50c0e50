//! Env file checks.

use std::path::{Path, PathBuf};

use super::CheckContext;
use crate::checks::environment::EnvFileStatus;
use crate::checks::error::{CheckError, Outcome};
use crate::checks::paths::resolve_against;
use crate::config::EnvFileParser;

/// Verify a KEY=value file exists and can be read.
///
/// The env file named in settings is read once when the environment is
/// built; a check on that path reports what was loaded then.
pub fn check(ctx: &CheckContext<'_>, path: &Path) -> Result<Outcome, CheckError> {
    let full_path = resolve_against(ctx.project_root, path);

    let status = match ctx.env.env_file_status() {
        Some(status) if status.path() == full_path.as_path() => status.clone(),
        _ => load(full_path),
    };

    match status {
        EnvFileStatus::Loaded { path, count } => {
            Ok(Outcome::new(format!("loaded {}", path.display())).with_count(count))
        }
        EnvFileStatus::Missing { path } => Err(CheckError::FileMissing { path }),
        EnvFileStatus::Unreadable { path, message } => Err(CheckError::FileUnparsable {
            path,
            format: "env".to_string(),
            message,
        }),
    }
}

fn load(path: PathBuf) -> EnvFileStatus {
    match EnvFileParser::load_optional(&path) {
        Ok(Some(vars)) => EnvFileStatus::Loaded {
            path,
            count: vars.len(),
        },
        Ok(None) => EnvFileStatus::Missing { path },
        Err(e) => EnvFileStatus::Unreadable {
            path,
            message: format!("{:#}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::env;
    use super::*;
    use crate::checks::probe::ProbeRegistry;
    use tempfile::TempDir;

    #[test]
    fn counts_loaded_variables() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("env")).unwrap();
        std::fs::write(temp.path().join("env/.env"), "A=1\n# c\nB=2\n").unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let ctx = CheckContext {
            project_root: temp.path(),
            env: &env,
            probes: &probes,
        };

        let outcome = check(&ctx, Path::new("env/.env")).unwrap();
        assert_eq!(outcome.count, Some(2));
        assert!(outcome.message.contains(".env"));
    }

    #[test]
    fn missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let ctx = CheckContext {
            project_root: temp.path(),
            env: &env,
            probes: &probes,
        };

        let err = check(&ctx, Path::new("env/.env")).unwrap_err();
        assert!(matches!(err, CheckError::FileMissing { .. }));
    }

    #[test]
    fn settings_env_file_reports_what_was_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "A=1\nB=2\nC=3\n").unwrap();
        let env = env(&[]).with_env_file(&path);
        // Later edits are not seen; the snapshot is what checks used.
        std::fs::write(&path, "A=1\n").unwrap();
        let probes = ProbeRegistry::new();
        let ctx = CheckContext {
            project_root: temp.path(),
            env: &env,
            probes: &probes,
        };

        let outcome = check(&ctx, Path::new(".env")).unwrap();
        assert_eq!(outcome.count, Some(3));
    }

    #[test]
    fn settings_env_file_missing_at_load_time_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        let env = env(&[]).with_env_file(&path);
        std::fs::write(&path, "A=1\n").unwrap();
        let probes = ProbeRegistry::new();
        let ctx = CheckContext {
            project_root: temp.path(),
            env: &env,
            probes: &probes,
        };

        let err = check(&ctx, Path::new(".env")).unwrap_err();
        assert!(matches!(err, CheckError::FileMissing { .. }));
    }
}
