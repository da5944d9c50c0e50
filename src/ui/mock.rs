//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use preflight::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status(StatusKind::Failed, "APP_PATH: APP_PATH not set");
//! ui.hint("export APP_PATH=/path/to/app");
//!
//! assert_eq!(ui.statuses()[0].0, StatusKind::Failed);
//! assert!(ui.hints().contains(&"export APP_PATH=/path/to/app".to_string()));
//! ```

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    verdicts: Vec<(StatusKind, String)>,
    statuses: Vec<(StatusKind, String)>,
    details: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    sections: Vec<(usize, String)>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles with their numbers.
    pub fn sections(&self) -> &[(usize, String)] {
        &self.sections
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all verdict lines.
    pub fn verdicts(&self) -> &[(StatusKind, String)] {
        &self.verdicts
    }

    /// Check if any message, status, detail or hint contains `text`.
    pub fn has_output(&self, text: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(self.verdicts.iter().map(|(_, s)| s))
            .chain(self.statuses.iter().map(|(_, s)| s))
            .chain(&self.details)
            .chain(&self.hints)
            .any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn verdict(&mut self, kind: StatusKind, msg: &str) {
        self.verdicts.push((kind, msg.to_string()));
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, number: usize, title: &str) {
        self.sections.push((number, title.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that records what it was told.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
