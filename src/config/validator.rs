//! Configuration validation rules.
//!
//! Collects every problem in a check plan before anything runs:
//! - Sections must have a title
//! - Variables, paths and module identifiers must be non-empty
//! - Ports and timeouts must be non-zero
//! - Check names must be unique within a section
//! - Importable checks must name a known capability probe

use crate::checks::plan::default_check_name;
use crate::checks::probe::{is_valid_module_id, BUILTIN_PROBES, PYTHON_PROBE};
use crate::config::interpolation::extract_variables;
use crate::config::schema::{CheckKindConfig, PreflightConfig};
use crate::error::{PreflightError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Section title if the error is section-specific
    pub section: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String, section: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            section: section.map(String::from),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PreflightConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.settings.port_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "settings.port_timeout_ms must be greater than zero".to_string(),
            None,
        ));
    }

    if config.settings.interpreter.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-interpreter",
            "settings.interpreter must not be empty".to_string(),
            None,
        ));
    }

    for section in &config.sections {
        let title = section.title.as_str();
        if title.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-section-title",
                "Every section needs a non-empty title".to_string(),
                None,
            ));
        }

        let mut seen = HashSet::new();
        for check in &section.checks {
            let name = check
                .name
                .clone()
                .unwrap_or_else(|| default_check_name(&check.kind));
            if !seen.insert(name.clone()) {
                errors.push(ValidationError::new(
                    "duplicate-check",
                    format!(
                        "Section '{}' has more than one check named '{}'",
                        title, name
                    ),
                    Some(title),
                ));
            }

            errors.extend(validate_kind(&check.kind, &name, title));
        }
    }

    errors
}

fn validate_kind(kind: &CheckKindConfig, name: &str, section: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut push = |rule: &str, message: String| {
        errors.push(ValidationError::new(rule, message, Some(section)));
    };

    match kind {
        CheckKindConfig::EnvVar { var, .. } => {
            if var.trim().is_empty() || var.contains('=') {
                push(
                    "invalid-var",
                    format!("Check '{}' has an invalid variable name '{}'", name, var),
                );
            }
        }
        CheckKindConfig::EnvFile { path } => {
            if path.as_os_str().is_empty() {
                push("empty-path", format!("Check '{}' has an empty path", name));
            }
        }
        CheckKindConfig::Port {
            host,
            port,
            timeout_ms,
        } => {
            if host.trim().is_empty() {
                push("empty-host", format!("Check '{}' has an empty host", name));
            }
            if *port == 0 {
                push("zero-port", format!("Check '{}' must use a non-zero port", name));
            }
            if *timeout_ms == Some(0) {
                push(
                    "zero-timeout",
                    format!("Check '{}' must use a non-zero timeout", name),
                );
            }
        }
        CheckKindConfig::FileExists { path, .. } | CheckKindConfig::ParsedFile { path, .. } => {
            if path.trim().is_empty() {
                push("empty-path", format!("Check '{}' has an empty path", name));
            }
            if extract_variables(path).contains("") {
                push(
                    "empty-variable",
                    format!("Check '{}' references an empty variable '${{}}'", name),
                );
            }
        }
        CheckKindConfig::Importable { module, probe } => {
            if !BUILTIN_PROBES.contains(&probe.as_str()) {
                push(
                    "unknown-probe",
                    format!(
                        "Check '{}' uses unknown probe '{}' (expected one of: {})",
                        name,
                        probe,
                        BUILTIN_PROBES.join(", ")
                    ),
                );
            }
            if module.trim().is_empty() {
                push(
                    "empty-module",
                    format!("Check '{}' has an empty module", name),
                );
            } else if probe == PYTHON_PROBE && !is_valid_module_id(module) {
                push(
                    "invalid-module",
                    format!("Check '{}' has an invalid module id '{}'", name, module),
                );
            }
        }
    }

    errors
}

/// Validate a configuration, failing with every problem listed.
pub fn validate(config: &PreflightConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("[{}] {}", e.rule, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(PreflightError::ConfigValidationError { message })
}
