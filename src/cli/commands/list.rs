//! List command implementation.
//!
//! The `preflight list` command shows the check plan without running it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checks::{build_plan, Check, ProbeRegistry, Severity};
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{load_checked_config, CONFIG_ERROR_EXIT};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListedCheck<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<&'a str>,
    #[serde(rename = "type")]
    kind: &'static str,
    target: String,
    severity: Severity,
}

impl<'a> From<&'a Check> for ListedCheck<'a> {
    fn from(check: &'a Check) -> Self {
        Self {
            name: &check.name,
            section: check.section.as_deref(),
            kind: check.kind.label(),
            target: check.kind.target(),
            severity: check.severity,
        }
    }
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_checked_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };
        let plan = build_plan(&config);

        if self.args.json {
            let listed: Vec<ListedCheck<'_>> = plan.iter().map(ListedCheck::from).collect();
            let json = serde_json::to_string_pretty(&listed)
                .map_err(|e| crate::error::PreflightError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let mut current: Option<&str> = None;
        for check in &plan {
            let section = check.section.as_deref();
            if section != current {
                current = section;
                if let Some(title) = section {
                    ui.message("");
                    ui.message(&format!("{}:", title));
                }
            }
            let severity = match check.severity {
                Severity::Error => "",
                Severity::Warning => " [warning]",
            };
            ui.message(&format!(
                "  {}  ({} {}){}",
                check.name,
                check.kind.label(),
                check.kind.target(),
                severity
            ));
        }

        ui.message("");
        ui.message("Capability probes:");
        for probe in ProbeRegistry::with_builtins(&config.settings).iter() {
            ui.message(&format!("  {}  {}", probe.name(), probe.description()));
        }

        Ok(CommandResult::success())
    }
}
