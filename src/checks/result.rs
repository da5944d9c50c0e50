//! Check results and the aggregate report.

use serde::Serialize;

use super::check::{Check, Severity};
use super::error::{CheckError, Outcome};

/// Outcome of running one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Name of the check that produced this result.
    pub check_name: String,
    /// Section the check belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Whether the precondition holds.
    pub passed: bool,
    /// What was found, or what was expected and found instead.
    pub message: String,
    /// Severity of a failure; `None` when passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Derived diagnostic count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Extra diagnostic lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Remediation hints (failures only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl CheckResult {
    /// A passing result for `check`.
    pub fn pass(check: &Check, outcome: Outcome) -> Self {
        Self {
            check_name: check.name.clone(),
            section: check.section.clone(),
            passed: true,
            message: outcome.message,
            severity: None,
            count: outcome.count,
            details: outcome.details,
            hints: Vec::new(),
        }
    }

    /// A failing result for `check`, carrying its configured severity.
    pub fn fail(check: &Check, message: impl Into<String>) -> Self {
        Self {
            check_name: check.name.clone(),
            section: check.section.clone(),
            passed: false,
            message: message.into(),
            severity: Some(check.severity),
            count: None,
            details: Vec::new(),
            hints: check.hints.clone(),
        }
    }

    /// Convert an adapter's verdict into a result.
    pub fn from_outcome(check: &Check, outcome: Result<Outcome, CheckError>) -> Self {
        match outcome {
            Ok(outcome) => Self::pass(check, outcome),
            Err(err) => Self::fail(check, err.to_string()),
        }
    }

    /// Whether this result is a failure of the given severity.
    pub fn is(&self, severity: Severity) -> bool {
        self.severity == Some(severity)
    }
}

/// Every result of one verification run, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// All results, in run order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no checks ran.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Failing results with Error severity.
    pub fn errors(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is(Severity::Error))
    }

    /// Failing results with Warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is(Severity::Warning))
    }

    /// Number of Error results.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of Warning results.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Number of passing results.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// At least one Error result.
    pub fn is_blocked(&self) -> bool {
        self.error_count() > 0
    }

    /// Process exit status: non-zero iff blocked.
    pub fn exit_code(&self) -> i32 {
        if self.is_blocked() {
            1
        } else {
            0
        }
    }
}

impl FromIterator<CheckResult> for Report {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, severity: Severity) -> Check {
        Check::file_exists(name).with_severity(severity)
    }

    #[test]
    fn pass_has_no_severity() {
        let result = CheckResult::pass(&check("a", Severity::Error), Outcome::new("ok"));
        assert!(result.passed);
        assert!(result.severity.is_none());
        assert!(result.hints.is_empty());
    }

    #[test]
    fn fail_carries_configured_severity_and_hints() {
        let c = check("a", Severity::Warning).with_hint("created at runtime");
        let result = CheckResult::fail(&c, "missing");
        assert!(!result.passed);
        assert_eq!(result.severity, Some(Severity::Warning));
        assert_eq!(result.hints, vec!["created at runtime"]);
    }

    #[test]
    fn counts_match_severities() {
        let report: Report = vec![
            CheckResult::pass(&check("a", Severity::Error), Outcome::new("ok")),
            CheckResult::fail(&check("b", Severity::Error), "bad"),
            CheckResult::fail(&check("c", Severity::Warning), "meh"),
            CheckResult::fail(&check("d", Severity::Warning), "meh"),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 4);
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert!(report.is_blocked());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn warnings_alone_do_not_block() {
        let mut report = Report::new();
        report.push(CheckResult::fail(&check("c", Severity::Warning), "meh"));

        assert!(!report.is_blocked());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn empty_report_is_clear() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn from_outcome_formats_error() {
        let c = Check::env_var("APP_PATH");
        let result = CheckResult::from_outcome(
            &c,
            Err(CheckError::MissingEnvVar {
                var: "APP_PATH".into(),
            }),
        );
        assert!(!result.passed);
        assert_eq!(result.severity, Some(Severity::Error));
        assert!(result.message.contains("not set"));
    }
}
