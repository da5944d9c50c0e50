//! Library-level tests driving the verifier through its public API.

use preflight::checks::{build_plan, verify, Severity};
use preflight::config::parse_config;
use preflight::report::{Summary, Verdict};
use std::fs;
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

fn config(yaml: &str) -> preflight::config::PreflightConfig {
    parse_config(yaml, Path::new("config.yml")).unwrap()
}

#[test]
fn live_port_passes_and_closed_port_blocks() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let open = listener.local_addr().unwrap().port();
    let closed = {
        let probe = TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };

    let config = config(&format!(
        r#"
sections:
  - title: Services
    checks:
      - type: port
        port: {open}
      - type: port
        port: {closed}
        timeout_ms: 500
        hints:
          - start the database
"#
    ));

    let temp = TempDir::new().unwrap();
    let report = verify(temp.path(), &config);

    assert_eq!(report.len(), 2);
    assert!(report.results()[0].passed);
    assert!(!report.results()[1].passed);
    assert_eq!(report.results()[1].severity, Some(Severity::Error));
    assert_eq!(report.results()[1].hints, vec!["start the database"]);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn parsed_file_reports_entry_count() {
    let temp = TempDir::new().unwrap();
    let json = r#"{"a": 1, "b": 2, "c": 3}"#;
    fs::write(temp.path().join("servers.json"), json).unwrap();

    let config = config(
        r#"
sections:
  - title: Files
    checks:
      - type: parsed_file
        path: servers.json
"#,
    );

    let report = verify(temp.path(), &config);
    let result = &report.results()[0];
    assert!(result.passed, "{}", result.message);
    assert_eq!(result.count, Some(3));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn unparsable_file_fails_with_parser_message() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.yml"), "key: [unclosed\n").unwrap();

    let config = config(
        r#"
sections:
  - title: Files
    checks:
      - type: parsed_file
        path: broken.yml
"#,
    );

    let report = verify(temp.path(), &config);
    let result = &report.results()[0];
    assert!(!result.passed);
    assert!(
        result.message.contains("is not valid"),
        "{}",
        result.message
    );
}

#[test]
fn warnings_alone_do_not_block() {
    let temp = TempDir::new().unwrap();
    let config = config(
        r#"
sections:
  - title: Files
    checks:
      - type: file_exists
        path: optional.txt
        severity: warning
"#,
    );

    let report = verify(temp.path(), &config);
    let summary = Summary::from_report(&report, &config.summary);
    assert_eq!(summary.verdict, Verdict::ProceedWithWarnings);
    assert_eq!(summary.exit_code, 0);

    let strict = Summary::evaluate(&report, &config.summary, true);
    assert_eq!(strict.exit_code, 1);
}

#[test]
fn env_file_values_feed_later_checks() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "PREFLIGHT_LIB_DATA=data.yml\n",
    )
    .unwrap();
    fs::write(temp.path().join("data.yml"), "one: 1\n").unwrap();

    let config = config(
        r#"
settings:
  env_file: .env
sections:
  - title: Data
    checks:
      - type: file_exists
        path: ${PREFLIGHT_LIB_DATA}
"#,
    );

    let plan = build_plan(&config);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].severity, Severity::Warning);

    let report = verify(temp.path(), &config);
    assert!(report.results().iter().all(|r| r.passed));
    assert_eq!(report.results()[0].count, Some(1));
}

#[test]
fn verification_is_repeatable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("present.txt"), "x").unwrap();

    let config = config(
        r#"
sections:
  - title: Files
    checks:
      - type: file_exists
        path: present.txt
      - type: file_exists
        path: absent.txt
"#,
    );

    let first = verify(temp.path(), &config);
    let second = verify(temp.path(), &config);
    assert_eq!(first, second);
}
