//! Check plan execution.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info, warn};

use super::adapters::{self, CheckContext};
use super::check::{Check, CheckKind};
use super::environment::Environment;
use super::error::{CheckError, Outcome};
use super::plan::build_plan;
use super::probe::ProbeRegistry;
use super::result::{CheckResult, Report};
use crate::config::PreflightConfig;

/// Run every check in `config` against the process environment.
///
/// ```
/// use preflight::checks::verify;
/// use preflight::config::parse_config;
/// use std::path::Path;
///
/// let config = parse_config(
///     "sections:\n  - title: Env\n    checks:\n      - type: env_var\n        var: PREFLIGHT_DOC_UNSET\n",
///     Path::new("config.yml"),
/// )
/// .unwrap();
/// let report = verify(Path::new("."), &config);
/// assert_eq!(report.error_count(), 1);
/// ```
pub fn verify(project_root: &Path, config: &PreflightConfig) -> Report {
    let env = Environment::for_settings(project_root, &config.settings);
    let probes = ProbeRegistry::with_builtins(&config.settings);
    CheckRunner::new(project_root, &env, &probes).run(&build_plan(config))
}

/// Progress events emitted while a plan runs.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A check is about to start.
    CheckStarting {
        check: &'a Check,
        index: usize,
        total: usize,
    },
    /// A check finished.
    CheckFinished {
        check: &'a Check,
        result: &'a CheckResult,
    },
}

/// Runs checks in order and collects a [`Report`].
///
/// Every check produces exactly one result. Failures, including panics in
/// an adapter, become failing results and never abort the run.
pub struct CheckRunner<'a> {
    project_root: &'a Path,
    env: &'a Environment,
    probes: &'a ProbeRegistry,
}

impl<'a> CheckRunner<'a> {
    pub fn new(project_root: &'a Path, env: &'a Environment, probes: &'a ProbeRegistry) -> Self {
        Self {
            project_root,
            env,
            probes,
        }
    }

    /// Run every check.
    pub fn run(&self, checks: &[Check]) -> Report {
        self.run_with_progress(checks, &mut |_| {})
    }

    /// Run every check, reporting progress to `on_progress`.
    pub fn run_with_progress(
        &self,
        checks: &[Check],
        on_progress: &mut dyn FnMut(RunProgress<'_>),
    ) -> Report {
        let total = checks.len();
        let mut report = Report::new();

        for (index, check) in checks.iter().enumerate() {
            on_progress(RunProgress::CheckStarting {
                check,
                index,
                total,
            });

            let result = self.run_one(check);

            on_progress(RunProgress::CheckFinished {
                check,
                result: &result,
            });
            report.push(result);
        }

        report
    }

    /// Run a single check.
    pub fn run_one(&self, check: &Check) -> CheckResult {
        debug!("Running {} check '{}'", check.kind.label(), check.name);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(check)));

        let result = match outcome {
            Ok(outcome) => CheckResult::from_outcome(check, outcome),
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                warn!("Check '{}' panicked: {}", check.name, reason);
                CheckResult::fail(check, format!("check aborted unexpectedly: {}", reason))
            }
        };

        if !result.passed {
            info!(
                "Check '{}' failed ({}): {}",
                check.name, check.severity, result.message
            );
        }
        result
    }

    fn dispatch(&self, check: &Check) -> Result<Outcome, CheckError> {
        let ctx = CheckContext {
            project_root: self.project_root,
            env: self.env,
            probes: self.probes,
        };

        match &check.kind {
            CheckKind::EnvVar {
                var,
                expects_path,
                secret,
            } => adapters::env_var::check(&ctx, var, *expects_path, *secret),
            CheckKind::EnvFile { path } => adapters::env_file::check(&ctx, path),
            CheckKind::Port {
                host,
                port,
                timeout,
            } => adapters::port::check(host, *port, *timeout),
            CheckKind::FileExists { path, anchor_env } => {
                adapters::file::check(&ctx, path, anchor_env.as_deref())
            }
            CheckKind::ParsedFile { path, format } => {
                adapters::parsed_file::check(&ctx, path, *format)
            }
            CheckKind::Importable { module, probe } => {
                adapters::importable::check(&ctx, module, probe)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::check::{DataFormat, Severity};
    use crate::checks::probe::{CapabilityProbe, ProbeContext};
    use std::collections::HashMap;
    use std::net::TcpListener;
    use std::time::Duration;
    use tempfile::TempDir;

    struct PanickingProbe;

    impl CapabilityProbe for PanickingProbe {
        fn name(&self) -> &str {
            "boom"
        }

        fn description(&self) -> &str {
            "always panics"
        }

        fn probe(&self, _target: &str, _ctx: &ProbeContext<'_>) -> Result<Outcome, CheckError> {
            panic!("probe exploded");
        }
    }

    fn env(pairs: &[(&str, &str)]) -> Environment {
        Environment::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn one_result_per_check_in_order() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("present.txt"), "").unwrap();
        let env = env(&[("MODE", "lite")]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);

        let checks = vec![
            Check::env_var("MODE"),
            Check::env_var("APP_PATH"),
            Check::file_exists("present.txt").with_severity(Severity::Warning),
            Check::file_exists("absent.txt").with_severity(Severity::Warning),
            Check::importable("numpy", "nonexistent-probe"),
        ];
        let report = runner.run(&checks);

        assert_eq!(report.len(), checks.len());
        let names: Vec<_> = report.results().iter().map(|r| r.check_name.as_str()).collect();
        let expected: Vec<_> = checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, expected);

        let passed: Vec<_> = report.results().iter().map(|r| r.passed).collect();
        assert_eq!(passed, vec![true, false, true, false, false]);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 1);
        assert!(report.is_blocked());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn unset_app_path_is_error_not_set() {
        let temp = TempDir::new().unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);

        let report = runner.run(&[Check::env_path("APP_PATH")]);
        let result = &report.results()[0];
        assert!(!result.passed);
        assert_eq!(result.severity, Some(Severity::Error));
        assert!(result.message.contains("not set"));
    }

    #[test]
    fn closed_port_fails_within_timeout() {
        let temp = TempDir::new().unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);

        let report = runner.run(&[Check::port(
            "127.0.0.1",
            closed_port(),
            Duration::from_millis(2000),
        )
        .with_hint("Make sure Stardew Valley is running")]);
        let result = &report.results()[0];
        assert!(!result.passed);
        assert_eq!(result.hints, vec!["Make sure Stardew Valley is running"]);
    }

    #[test]
    fn parsed_file_counts_entries() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("tasks.yaml"), "a: 1\nb: 2\nc: 3\n").unwrap();
        std::fs::write(temp.path().join("bad.yaml"), "a: [1, 2\n").unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);

        let report = runner.run(&[
            Check::parsed_file("tasks.yaml", DataFormat::Yaml),
            Check::parsed_file("bad.yaml", DataFormat::Yaml),
        ]);

        let good = &report.results()[0];
        assert!(good.passed);
        assert_eq!(good.count, Some(3));

        let bad = &report.results()[1];
        assert!(!bad.passed);
        assert_eq!(bad.severity, Some(Severity::Error));
        assert!(bad.message.contains("not valid YAML"));
    }

    #[test]
    fn panics_become_failing_results() {
        let temp = TempDir::new().unwrap();
        let env = env(&[("MODE", "lite")]);
        let mut probes = ProbeRegistry::new();
        probes.register(Box::new(PanickingProbe));
        let runner = CheckRunner::new(temp.path(), &env, &probes);

        let report = runner.run(&[Check::importable("x", "boom"), Check::env_var("MODE")]);

        assert_eq!(report.len(), 2);
        assert!(!report.results()[0].passed);
        assert!(report.results()[0].message.contains("probe exploded"));
        assert!(report.results()[1].passed);
    }

    #[test]
    fn same_plan_same_report() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("data.json"), "[1, 2]").unwrap();
        let env = env(&[("MODE", "lite")]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);
        let checks = vec![
            Check::env_var("MODE"),
            Check::env_var("MISSING"),
            Check::parsed_file("data.json", DataFormat::Json),
            Check::file_exists("nope"),
        ];

        let first = serde_json::to_value(runner.run(&checks)).unwrap();
        let second = serde_json::to_value(runner.run(&checks)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn progress_events_bracket_each_check() {
        let temp = TempDir::new().unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let runner = CheckRunner::new(temp.path(), &env, &probes);
        let checks = vec![Check::env_var("A"), Check::env_var("B")];

        let mut events = Vec::new();
        runner.run_with_progress(&checks, &mut |event| match event {
            RunProgress::CheckStarting { check, index, total } => {
                events.push(format!("start {} {}/{}", check.name, index + 1, total))
            }
            RunProgress::CheckFinished { check, result } => {
                events.push(format!("done {} {}", check.name, result.passed))
            }
        });

        assert_eq!(
            events,
            vec!["start A 1/2", "done A false", "start B 2/2", "done B false"]
        );
    }

    #[test]
    fn empty_plan_is_all_clear() {
        let temp = TempDir::new().unwrap();
        let env = env(&[]);
        let probes = ProbeRegistry::new();
        let report = CheckRunner::new(temp.path(), &env, &probes).run(&[]);
        assert!(report.is_empty());
        assert_eq!(report.exit_code(), 0);
    }
}
