//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for TTY output with colors, icons and spinners
//! - [`NonInteractiveUI`] for pipes, CI logs and files
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use preflight::ui::{create_ui, OutputMode, StatusKind, UserInterface};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet, false);
//! ui.show_header("StarDojo Preflight Check");
//! ui.status(StatusKind::Success, "STARDEW_APP_PATH: /games/StardewModdingAPI");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PreflightTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line on stdout.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display the run's verdict line on stdout.
    ///
    /// Unlike [`UserInterface::error`] and [`UserInterface::warning`], this
    /// is part of the report and never goes to stderr.
    fn verdict(&mut self, kind: StatusKind, msg: &str);

    /// Display a status line with a glyph for `kind`.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display an indented secondary line under a status line.
    fn detail(&mut self, msg: &str);

    /// Display an indented remediation hint.
    fn hint(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a numbered section title.
    fn show_section(&mut self, number: usize, title: &str);

    /// Start a spinner for an in-flight check.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop and erase the spinner.
    fn finish(&mut self);
}
