//! Human-readable rendering.
//!
//! Results are printed one at a time as checks finish, grouped under
//! numbered section titles, then the summary block.

use crate::checks::{Check, CheckResult, Report};
use crate::ui::{OutputMode, StatusKind, UserInterface};

use super::summary::{Summary, Verdict};

/// Prints results and the summary through a [`UserInterface`].
///
/// Tracks the current section so a title is printed once, when the first
/// check in it starts.
#[derive(Debug, Default)]
pub struct HumanRenderer {
    current_section: Option<String>,
    section_count: usize,
}

impl HumanRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the section title for `check` if it starts a new section.
    pub fn enter(&mut self, ui: &mut dyn UserInterface, check: &Check) {
        self.enter_section(ui, check.section.as_deref());
    }

    fn enter_section(&mut self, ui: &mut dyn UserInterface, section: Option<&str>) {
        let Some(title) = section else {
            return;
        };
        if self.current_section.as_deref() == Some(title) {
            return;
        }
        self.current_section = Some(title.to_string());
        self.section_count += 1;
        if ui.output_mode().shows_passing() {
            ui.show_section(self.section_count, title);
        }
    }

    /// Print one result: a status line, details, then hints on failure.
    pub fn result(&mut self, ui: &mut dyn UserInterface, check: &Check, result: &CheckResult) {
        let mode = ui.output_mode();
        if result.passed && !mode.shows_passing() {
            return;
        }

        let line = format!("{}: {}", result.check_name, result.message);
        ui.status(StatusKind::from(result), &line);

        if let Some(count) = result.count {
            ui.detail(&format!("Entries found: {}", count));
        }
        for detail in &result.details {
            ui.detail(detail);
        }
        if mode == OutputMode::Verbose {
            ui.detail(&format!("{} {}", check.kind.label(), check.kind.target()));
        }
        for hint in &result.hints {
            ui.hint(hint);
        }
    }

    /// Print a finished report in one go.
    pub fn report(&mut self, ui: &mut dyn UserInterface, checks: &[Check], report: &Report) {
        for (check, result) in checks.iter().zip(report.results()) {
            self.enter(ui, check);
            self.result(ui, check, result);
        }
    }

    /// Print the summary block.
    pub fn summary(&self, ui: &mut dyn UserInterface, summary: &Summary) {
        ui.message("");
        ui.message(&"=".repeat(40));
        ui.message("SUMMARY");
        ui.message(&"=".repeat(40));

        match summary.verdict {
            Verdict::Blocked => {
                if summary.errors.is_empty() {
                    let line = format!(
                        "Found {} warning(s), which block in strict mode:",
                        summary.warnings.len()
                    );
                    ui.verdict(StatusKind::Failed, &line);
                    numbered(ui, &summary.warnings);
                } else {
                    let line = format!(
                        "Found {} error(s) that must be fixed:",
                        summary.errors.len()
                    );
                    ui.verdict(StatusKind::Failed, &line);
                    numbered(ui, &summary.errors);
                    if !summary.warnings.is_empty() {
                        ui.message("");
                        ui.message(&format!("Also found {} warning(s):", summary.warnings.len()));
                        numbered(ui, &summary.warnings);
                    }
                }
                if !summary.common_issues.is_empty() {
                    ui.message("");
                    ui.message("Most common issues:");
                    for line in &summary.common_issues {
                        ui.message(&format!("  - {}", line));
                    }
                }
            }
            Verdict::ProceedWithWarnings => {
                let line = format!(
                    "All critical checks passed, {} warning(s):",
                    summary.warnings.len()
                );
                ui.verdict(StatusKind::Warning, &line);
                numbered(ui, &summary.warnings);
                ui.message("");
                ui.message("You can proceed, but some features may not work correctly.");
            }
            Verdict::AllClear => {
                ui.verdict(StatusKind::Success, "All checks passed! Ready to launch.");
                if !summary.next_steps.is_empty() {
                    ui.message("");
                    ui.message("Next steps:");
                    for (i, line) in summary.next_steps.iter().enumerate() {
                        ui.message(&format!("  {}. {}", i + 1, line));
                    }
                }
            }
        }
    }
}

fn numbered(ui: &mut dyn UserInterface, lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        ui.message(&format!("  {}. {}", i + 1, line));
    }
}
