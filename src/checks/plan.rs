//! Turning a loaded config into an ordered list of checks.

use std::path::Path;
use std::time::Duration;

use super::check::{Check, CheckKind, DataFormat, Severity};
use crate::config::{CheckConfig, CheckKindConfig, PreflightConfig};
use crate::secrets::SecretMatcher;

/// Name used for a check that has none configured.
pub fn default_check_name(kind: &CheckKindConfig) -> String {
    match kind {
        CheckKindConfig::EnvVar { var, .. } => var.clone(),
        CheckKindConfig::EnvFile { path } => path.display().to_string(),
        CheckKindConfig::Port { host, port, .. } => format!("{}:{}", host, port),
        CheckKindConfig::FileExists { path, .. } | CheckKindConfig::ParsedFile { path, .. } => {
            path.clone()
        }
        CheckKindConfig::Importable { module, .. } => module.clone(),
    }
}

/// Build the check plan, in declared order.
///
/// When `settings.env_file` is set and no section already checks that
/// file, an env-file check is placed first.
pub fn build_plan(config: &PreflightConfig) -> Vec<Check> {
    let secrets = SecretMatcher::with_builtins_and_custom(&config.settings.secret_env);
    let default_timeout = Duration::from_millis(config.settings.port_timeout_ms);

    let mut plan = Vec::new();

    if let Some(env_file) = &config.settings.env_file {
        let already_checked = config.sections.iter().flat_map(|s| &s.checks).any(|c| {
            matches!(&c.kind, CheckKindConfig::EnvFile { path } if path == env_file)
        });
        if !already_checked {
            plan.push(
                Check::new(
                    format!("Env file {}", env_file.display()),
                    CheckKind::EnvFile {
                        path: env_file.clone(),
                    },
                )
                .with_severity(Severity::Warning),
            );
        }
    }

    for section in &config.sections {
        for check in &section.checks {
            plan.push(
                build_check(check, &secrets, default_timeout).with_section(section.title.clone()),
            );
        }
    }

    plan
}

fn build_check(config: &CheckConfig, secrets: &SecretMatcher, default_timeout: Duration) -> Check {
    let kind = match &config.kind {
        CheckKindConfig::EnvVar {
            var,
            expects_path,
            secret,
        } => CheckKind::EnvVar {
            var: var.clone(),
            expects_path: *expects_path,
            secret: secret.unwrap_or_else(|| secrets.is_secret(var)),
        },
        CheckKindConfig::EnvFile { path } => CheckKind::EnvFile { path: path.clone() },
        CheckKindConfig::Port {
            host,
            port,
            timeout_ms,
        } => CheckKind::Port {
            host: host.clone(),
            port: *port,
            timeout: timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(default_timeout),
        },
        CheckKindConfig::FileExists { path, anchor_env } => CheckKind::FileExists {
            path: path.clone(),
            anchor_env: anchor_env.clone(),
        },
        CheckKindConfig::ParsedFile { path, format } => CheckKind::ParsedFile {
            path: path.clone(),
            format: format.unwrap_or_else(|| DataFormat::from_path(Path::new(path))),
        },
        CheckKindConfig::Importable { module, probe } => CheckKind::Importable {
            module: module.clone(),
            probe: probe.clone(),
        },
    };

    let default_severity = match kind {
        CheckKind::EnvFile { .. } => Severity::Warning,
        _ => Severity::Error,
    };

    let mut check = Check::new(
        config
            .name
            .clone()
            .unwrap_or_else(|| default_check_name(&config.kind)),
        kind,
    )
    .with_severity(config.severity.unwrap_or(default_severity));
    check.hints = config.hints.clone();
    check
}

/// Keep only checks in the named sections (case-insensitive).
///
/// Checks without a section, such as the env-file check, are always kept
/// since later checks may depend on the variables it loads.
pub fn filter_sections(plan: Vec<Check>, titles: &[String]) -> Vec<Check> {
    if titles.is_empty() {
        return plan;
    }
    plan.into_iter()
        .filter(|check| match &check.section {
            Some(section) => titles.iter().any(|t| t.eq_ignore_ascii_case(section)),
            None => true,
        })
        .collect()
}

/// Requested section titles that name no section in `config`.
pub fn unmatched_sections<'a>(config: &PreflightConfig, titles: &'a [String]) -> Vec<&'a str> {
    titles
        .iter()
        .filter(|t| {
            !config
                .sections
                .iter()
                .any(|s| s.title.eq_ignore_ascii_case(t))
        })
        .map(String::as_str)
        .collect()
}
