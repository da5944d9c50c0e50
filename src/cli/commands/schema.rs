//! Schema command implementation.
//!
//! The `preflight schema` command prints the JSON Schema of
//! `.preflight/config.yml` for editor completion and validation.

use crate::config::PreflightConfig;
use crate::error::{PreflightError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    pub fn new() -> Self {
        Self
    }

    /// Generate the schema document.
    pub fn generate() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(PreflightConfig)).unwrap_or_default()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&Self::generate())
            .map_err(|e| PreflightError::Other(e.into()))?;
        ui.message(&schema);
        Ok(CommandResult::success())
    }
}
