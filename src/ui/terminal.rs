//! TTY user interface.

use console::Term;
use std::io::Write;

use super::{
    NonInteractiveUI, OutputMode, PreflightTheme, ProgressSpinner, SpinnerHandle, StatusKind,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: PreflightTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: PreflightTheme::for_colors(use_color),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn verdict(&mut self, kind: StatusKind, msg: &str) {
        let line = match kind {
            StatusKind::Success => self.theme.format_success(msg),
            StatusKind::Warning => self.theme.format_warning(msg),
            StatusKind::Failed => self.theme.format_error(msg),
        };
        writeln!(self.term, "{}", line).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "   {}", kind.format(&self.theme, msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        writeln!(self.term, "     {}", self.theme.dim.apply_to(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        let hint = self.theme.hint.apply_to(format!("→ {}", msg));
        writeln!(self.term, "     {}", hint).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, number: usize, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_section(number, title)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode, use_color: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, use_color))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal, true);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose, false);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
