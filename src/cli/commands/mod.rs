//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod list;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{load_config, validate_config, PreflightConfig};
use crate::error::{PreflightError, Result};
use crate::ui::UserInterface;

/// Exit code for a missing or invalid config.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load and validate the config, reporting problems through `ui`.
///
/// Returns `Ok(None)` after printing the problem when the config is
/// missing, unparsable or invalid; callers exit with [`CONFIG_ERROR_EXIT`].
pub(crate) fn load_checked_config(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<PreflightConfig>> {
    let config = match load_config(project_root, config_override) {
        Ok(config) => config,
        Err(PreflightError::ConfigNotFound { path }) => {
            ui.error(&format!(
                "No configuration found at {}. Run 'preflight init' first.",
                path.display()
            ));
            return Ok(None);
        }
        Err(PreflightError::ConfigParseError { path, message }) => {
            ui.error(&format!("Parse error in {}: {}", path.display(), message));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        let lines: Vec<String> = errors
            .iter()
            .map(|error| format!("  [{}] {}", error.rule, error.message))
            .collect();
        ui.error(&format!(
            "Configuration has {} problem(s):\n{}",
            errors.len(),
            lines.join("\n")
        ));
        return Ok(None);
    }

    Ok(Some(config))
}
