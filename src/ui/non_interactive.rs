//! Plain-text UI for pipes, files and CI logs.

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// UI implementation for non-TTY output.
///
/// Status lines use bracketed labels instead of icons. Warnings and errors
/// about the verifier itself go to stderr; check results go to stdout.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", StatusKind::Success.format_plain(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Warning.format_plain(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Failed.format_plain(msg));
    }

    fn verdict(&mut self, kind: StatusKind, msg: &str) {
        println!("{}", kind.format_plain(msg));
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        println!("   {}", kind.format_plain(msg));
    }

    fn detail(&mut self, msg: &str) {
        println!("     {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        println!("     -> {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        let rule = "=".repeat(title.chars().count().max(40));
        println!("{}\n{}\n{}\n", rule, title, rule);
    }

    fn show_section(&mut self, number: usize, title: &str) {
        println!("\n{}. {}", number, title);
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that draws nothing.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish(&mut self) {}
}
