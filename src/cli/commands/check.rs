//! Check command implementation.
//!
//! The `preflight check` command runs the configured plan and prints one
//! line per check, then the summary. Exit status is 0 when nothing blocks,
//! 1 when something does, and 2 when the config is missing or invalid.

use std::path::{Path, PathBuf};

use crate::checks::{
    build_plan, filter_sections, unmatched_sections, CheckRunner, Environment, ProbeRegistry,
    RunProgress,
};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::report::{HumanRenderer, JsonFormatter, Summary};
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{load_checked_config, CONFIG_ERROR_EXIT};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_checked_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let unmatched = unmatched_sections(&config, &self.args.section);
        if !self.args.section.is_empty() && unmatched.len() == self.args.section.len() {
            ui.error(&format!("No section matches {}", unmatched.join(", ")));
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        }
        for title in &unmatched {
            ui.warning(&format!("No section matches {}, skipping it", title));
        }

        let plan = filter_sections(build_plan(&config), &self.args.section);

        let env = Environment::for_settings(&self.project_root, &config.settings);
        let probes = ProbeRegistry::with_builtins(&config.settings);
        let runner = CheckRunner::new(&self.project_root, &env, &probes);

        tracing::debug!(
            "Running {} checks from {}",
            plan.len(),
            self.project_root.display()
        );

        if self.args.json {
            let report = runner.run(&plan);
            let summary = Summary::evaluate(&report, &config.summary, self.args.strict);
            let mut output = Vec::new();
            JsonFormatter::new(config.app_name.clone()).format(&report, &summary, &mut output)?;
            ui.message(String::from_utf8_lossy(&output).trim_end());
            return Ok(CommandResult::from_exit_code(summary.exit_code));
        }

        let title = match &config.app_name {
            Some(name) => format!("{} Preflight Check", name),
            None => "Preflight Check".to_string(),
        };
        ui.show_header(&title);

        let mut renderer = HumanRenderer::new();
        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;
        let interactive = ui.is_interactive();

        let report = runner.run_with_progress(&plan, &mut |event| match event {
            RunProgress::CheckStarting { check, .. } => {
                renderer.enter(ui, check);
                if interactive {
                    spinner = Some(ui.start_spinner(&check.name));
                }
            }
            RunProgress::CheckFinished { check, result } => {
                if let Some(mut s) = spinner.take() {
                    s.finish();
                }
                renderer.result(ui, check, result);
            }
        });

        let summary = Summary::evaluate(&report, &config.summary, self.args.strict);
        renderer.summary(ui, &summary);

        Ok(CommandResult::from_exit_code(summary.exit_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, StatusKind};
    use std::fs;
    use std::net::TcpListener;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".preflight");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = CheckCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();
        (result, ui)
    }

    #[test]
    fn missing_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("No configuration found"));
    }

    #[test]
    fn invalid_config_exits_2() {
        let temp = setup_project(
            r#"
sections:
  - title: Ports
    checks:
      - type: port
        port: 0
"#,
        );
        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_output("[zero-port]"));
    }

    #[test]
    fn unparsable_config_exits_2() {
        let temp = setup_project("sections: [unclosed\n");
        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("Parse error"));
    }

    #[test]
    fn all_passing_exits_0() {
        let temp = setup_project(
            r#"
app_name: StarDojo
sections:
  - title: Files
    checks:
      - type: file_exists
        path: .preflight/config.yml
summary:
  next_steps: ["Launch the agent"]
"#,
        );
        let (result, ui) = run(&temp, CheckArgs::default());

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.headers(), &["StarDojo Preflight Check"]);
        assert_eq!(ui.sections(), &[(1, "Files".to_string())]);
        assert_eq!(ui.statuses()[0].0, StatusKind::Success);
        assert_eq!(ui.verdicts()[0].1, "All checks passed! Ready to launch.");
        assert!(ui.has_output("1. Launch the agent"));
    }

    #[test]
    fn blocking_failure_exits_1() {
        let temp = setup_project(
            r#"
sections:
  - title: Data
    checks:
      - type: parsed_file
        path: env/tasks/missing.yaml
        hints: ["Check out the task suite"]
summary:
  common_issues: ["Task files missing"]
"#,
        );
        let (result, ui) = run(&temp, CheckArgs::default());

        assert_eq!(result, CommandResult::failure(1));
        assert_eq!(ui.statuses()[0].0, StatusKind::Failed);
        assert_eq!(ui.hints(), &["Check out the task suite"]);
        assert!(ui.has_output("Most common issues:"));
    }

    #[test]
    fn warnings_exit_0_unless_strict() {
        let temp = setup_project(
            r#"
sections:
  - title: Game
    checks:
      - type: file_exists
        name: Memory mapped file
        path: shared_memory_10783.bin
        severity: warning
"#,
        );

        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.statuses()[0].0, StatusKind::Warning);

        let (result, _) = run(
            &temp,
            CheckArgs {
                strict: true,
                ..Default::default()
            },
        );
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn live_port_passes() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let temp = setup_project(&format!(
            r#"
sections:
  - title: Game Connection
    checks:
      - type: port
        port: {}
"#,
            port
        ));

        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 0);
        assert!(ui.statuses()[0].1.starts_with(&format!("127.0.0.1:{}", port)));
    }

    #[test]
    fn env_file_values_are_visible_to_checks() {
        let temp = setup_project(
            r#"
settings:
  env_file: env/.env
sections:
  - title: Env
    checks:
      - type: env_var
        var: PREFLIGHT_TEST_ONLY_IN_FILE
"#,
        );
        fs::create_dir_all(temp.path().join("env")).unwrap();
        fs::write(
            temp.path().join("env/.env"),
            "PREFLIGHT_TEST_ONLY_IN_FILE=from-file\n",
        )
        .unwrap();

        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.statuses().len(), 2);
        assert!(ui.has_output("PREFLIGHT_TEST_ONLY_IN_FILE is set to from-file"));
    }

    #[test]
    fn json_output_is_a_single_document() {
        let temp = setup_project(
            r#"
sections:
  - title: Env
    checks:
      - type: env_var
        var: PREFLIGHT_TEST_SURELY_UNSET_VAR
"#,
        );
        let (result, ui) = run(
            &temp,
            CheckArgs {
                json: true,
                ..Default::default()
            },
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.statuses().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["summary"]["verdict"], "blocked");
        assert!(value["results"][0]["message"]
            .as_str()
            .unwrap()
            .contains("not set"));
    }

    #[test]
    fn section_filter() {
        let temp = setup_project(
            r#"
sections:
  - title: Env
    checks:
      - type: env_var
        var: PREFLIGHT_TEST_SURELY_UNSET_VAR
  - title: Files
    checks:
      - type: file_exists
        path: .preflight
"#,
        );

        let (result, ui) = run(
            &temp,
            CheckArgs {
                section: vec!["files".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.statuses().len(), 1);

        let (result, ui) = run(
            &temp,
            CheckArgs {
                section: vec!["Nope".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("No section matches Nope"));

        let (result, ui) = run(
            &temp,
            CheckArgs {
                section: vec!["Files".to_string(), "Nope".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.statuses().len(), 1);
        assert_eq!(ui.warnings(), &["No section matches Nope, skipping it"]);
    }
}
