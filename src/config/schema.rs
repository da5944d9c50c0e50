//! Configuration schema definitions.
//!
//! These structs map to the YAML check plan at `.preflight/config.yml`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::checks::{DataFormat, Severity};

/// Root configuration structure for `.preflight/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PreflightConfig {
    /// Application name shown in the report header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Ordered sections of checks
    pub sections: Vec<SectionConfig>,

    /// Text shown in the summary block
    pub summary: SummaryConfig,
}

/// Global settings shared by all checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// KEY=value file loaded before checks run (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,

    /// Default connect timeout for port checks, in milliseconds
    pub port_timeout_ms: u64,

    /// Interpreter used by the `python` capability probe
    pub interpreter: String,

    /// Directories (relative to project root) prepended to PYTHONPATH
    pub python_path: Vec<String>,

    /// Extra variable names whose values must never be printed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secret_env: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: None,
            port_timeout_ms: default_port_timeout_ms(),
            interpreter: default_interpreter(),
            python_path: default_python_path(),
            secret_env: Vec::new(),
        }
    }
}

fn default_port_timeout_ms() -> u64 {
    2000
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_python_path() -> Vec<String> {
    vec![".".to_string()]
}

/// A titled group of checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionConfig {
    /// Section heading
    pub title: String,

    /// Checks in this section, run in order
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// A single check definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Human-readable name (defaults to a description of the target)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Severity when the check fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Remediation hints printed under a failing result
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,

    /// What to check
    #[serde(flatten)]
    pub kind: CheckKindConfig,
}

/// The kind-specific part of a check definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckKindConfig {
    /// An environment variable must be set
    EnvVar {
        /// Variable name
        var: String,
        /// The value names a path that must exist (`~` is expanded)
        #[serde(default)]
        expects_path: bool,
        /// Never print the value (defaults to name-based detection)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        secret: Option<bool>,
    },

    /// A KEY=value file must exist and be readable
    EnvFile {
        /// Path relative to project root
        path: PathBuf,
    },

    /// A TCP port must accept connections
    Port {
        /// Host to connect to
        #[serde(default = "default_host")]
        host: String,
        /// Port number
        port: u16,
        /// Connect timeout override, in milliseconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<u64>,
    },

    /// A file or directory must exist
    FileExists {
        /// Path (may contain `${VAR}` and a leading `~`)
        path: String,
        /// Resolve relative paths next to the file named by this variable
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor_env: Option<String>,
    },

    /// A file must exist and parse as structured data
    ParsedFile {
        /// Path (may contain `${VAR}` and a leading `~`)
        path: String,
        /// Data format (inferred from the extension when omitted)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<DataFormat>,
    },

    /// A module or tool must be loadable
    Importable {
        /// Module or tool identifier
        module: String,
        /// Capability probe to use
        #[serde(default = "default_probe")]
        probe: String,
    },
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_probe() -> String {
    "python".to_string()
}

/// Text for the summary block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SummaryConfig {
    /// Remediation lines shown when the run is blocked
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub common_issues: Vec<String>,

    /// Suggested next actions shown when everything passes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: PreflightConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.app_name.is_none());
        assert!(config.sections.is_empty());
        assert_eq!(config.settings.port_timeout_ms, 2000);
        assert_eq!(config.settings.interpreter, "python3");
        assert_eq!(config.settings.python_path, vec!["."]);
    }

    #[test]
    fn parses_every_check_kind() {
        let yaml = r#"
app_name: StarDojo
settings:
  env_file: env/.env
  python_path: [".", "agent"]
sections:
  - title: Everything
    checks:
      - type: env_var
        name: StardewModdingAPI executable
        var: STARDEW_APP_PATH
        expects_path: true
      - type: env_file
        path: env/.env
      - type: port
        port: 10783
        hints: ["Make sure the game is running"]
      - type: file_exists
        path: shared_memory_10783.bin
        anchor_env: STARDEW_APP_PATH
        severity: warning
      - type: parsed_file
        path: env/tasks/task_suite/farming_lite.yaml
      - type: importable
        module: numpy
"#;
        let config: PreflightConfig = serde_yaml::from_str(yaml).unwrap();
        let checks = &config.sections[0].checks;
        assert_eq!(checks.len(), 6);

        assert!(matches!(
            &checks[0].kind,
            CheckKindConfig::EnvVar { var, expects_path: true, secret: None } if var == "STARDEW_APP_PATH"
        ));
        assert!(matches!(&checks[1].kind, CheckKindConfig::EnvFile { .. }));
        match &checks[2].kind {
            CheckKindConfig::Port {
                host,
                port,
                timeout_ms,
            } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(*port, 10783);
                assert!(timeout_ms.is_none());
            }
            other => panic!("Expected Port, got {:?}", other),
        }
        assert_eq!(checks[2].hints, vec!["Make sure the game is running"]);
        assert_eq!(checks[3].severity, Some(Severity::Warning));
        assert!(matches!(
            &checks[4].kind,
            CheckKindConfig::ParsedFile { format: None, .. }
        ));
        assert!(matches!(
            &checks[5].kind,
            CheckKindConfig::Importable { probe, .. } if probe == "python"
        ));
    }

    #[test]
    fn unknown_check_type_is_rejected() {
        let yaml = r#"
sections:
  - title: Bad
    checks:
      - type: telepathy
        target: x
"#;
        assert!(serde_yaml::from_str::<PreflightConfig>(yaml).is_err());
    }

    #[test]
    fn parsed_file_format_is_lowercase() {
        let yaml = r#"
type: parsed_file
path: data.txt
format: json
"#;
        let check: CheckConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            check.kind,
            CheckKindConfig::ParsedFile {
                format: Some(DataFormat::Json),
                ..
            }
        ));
    }

    #[test]
    fn summary_lines_parse() {
        let yaml = r#"
summary:
  common_issues: ["Game not running"]
  next_steps: ["Run the agent"]
"#;
        let config: PreflightConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.summary.common_issues, vec!["Game not running"]);
        assert_eq!(config.summary.next_steps, vec!["Run the agent"]);
    }
}
