//! Report summarizing.

use serde::Serialize;

use crate::checks::Report;
use crate::config::SummaryConfig;

/// Overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// At least one blocking failure.
    Blocked,
    /// Only advisory failures.
    ProceedWithWarnings,
    /// Every check passed.
    AllClear,
}

/// Verdict plus everything needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub verdict: Verdict,
    pub total: usize,
    pub passed: usize,
    /// "name: message" for each Error result, in check order.
    pub errors: Vec<String>,
    /// "name: message" for each Warning result, in check order.
    pub warnings: Vec<String>,
    /// Remediation lines, present only when blocked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub common_issues: Vec<String>,
    /// Next actions, present only when all clear.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
    /// Warnings were treated as blocking.
    pub strict: bool,
    pub exit_code: i32,
}

impl Summary {
    /// Summarize a report. Only Error results block.
    pub fn from_report(report: &Report, config: &SummaryConfig) -> Self {
        Self::evaluate(report, config, false)
    }

    /// Summarize a report; with `strict`, warnings block too.
    pub fn evaluate(report: &Report, config: &SummaryConfig, strict: bool) -> Self {
        let describe = |r: &crate::checks::CheckResult| format!("{}: {}", r.check_name, r.message);
        let errors: Vec<String> = report.errors().map(describe).collect();
        let warnings: Vec<String> = report.warnings().map(describe).collect();

        let verdict = if !errors.is_empty() || (strict && !warnings.is_empty()) {
            Verdict::Blocked
        } else if !warnings.is_empty() {
            Verdict::ProceedWithWarnings
        } else {
            Verdict::AllClear
        };

        Self {
            verdict,
            total: report.len(),
            passed: report.passed_count(),
            errors,
            warnings,
            common_issues: match verdict {
                Verdict::Blocked => config.common_issues.clone(),
                _ => Vec::new(),
            },
            next_steps: match verdict {
                Verdict::AllClear => config.next_steps.clone(),
                _ => Vec::new(),
            },
            strict,
            exit_code: if verdict == Verdict::Blocked { 1 } else { 0 },
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.verdict == Verdict::Blocked
    }
}
