//! Init command implementation.
//!
//! The `preflight init` command writes a starter `.preflight/config.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::default_config_path;
use crate::checks::paths::resolve_against;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Where the config will be written.
    pub fn config_path(&self) -> PathBuf {
        match &self.config_override {
            Some(path) => resolve_against(&self.project_root, path),
            None => default_config_path(&self.project_root),
        }
    }

    /// Starter config content for this project.
    pub fn starter_config(&self) -> String {
        let app_name = self
            .project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("MyApp");

        format!(
            r#"# Preflight configuration for {app_name}
#
# Check types:
#   env_var      var, expects_path, secret
#   env_file     path
#   port         host (default 127.0.0.1), port, timeout_ms
#   file_exists  path (supports ${{VAR}} and ~), anchor_env
#   parsed_file  path, format (yaml | json, inferred from extension)
#   importable   module, probe (python | command)
#
# Every check accepts name, severity (error | warning) and hints.

app_name: {app_name:?}

settings:
  # env_file: .env
  port_timeout_ms: 2000
  interpreter: python3
  python_path: ["."]

sections:
  - title: Environment Variables
    checks:
      - type: env_var
        var: HOME
        expects_path: true

  - title: Tools
    checks:
      - type: importable
        probe: command
        module: git
        severity: warning
        hints: ["Install git from https://git-scm.com"]

  # - title: Services
  #   checks:
  #     - type: port
  #       port: 8080
  #       hints: ["Start the server first"]

summary:
  common_issues: []
  next_steps: []
"#
        )
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.config_path();
        if path.exists() && !self.args.force {
            ui.warning(&format!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.starter_config())?;
        tracing::debug!("Wrote starter config to {}", path.display());

        ui.success(&format!("Created {}", path.display()));
        ui.message("Edit it to describe your environment, then run 'preflight check'.");
        Ok(CommandResult::success())
    }
}
