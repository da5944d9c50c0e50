//! Visual theme and styling.

use console::Style;

/// Colors used for report output.
#[derive(Debug, Clone)]
pub struct PreflightTheme {
    /// Passing checks and the all-clear verdict (green).
    pub success: Style,
    /// Advisory failures (orange).
    pub warning: Style,
    /// Blocking failures (red bold).
    pub error: Style,
    /// Section numbers and spinners (magenta).
    pub info: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Emphasis (bold).
    pub highlight: Style,
    /// Banners and section titles (magenta bold).
    pub header: Style,
    /// Remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for PreflightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PreflightTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick colored or plain.
    pub fn for_colors(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(title.chars().count().max(40));
        format!(
            "{}\n{}\n{}",
            self.dim.apply_to(&rule),
            self.header.apply_to(title),
            self.dim.apply_to(&rule)
        )
    }

    /// Format a numbered section title.
    pub fn format_section(&self, number: usize, title: &str) -> String {
        format!(
            "{} {}",
            self.info.apply_to(format!("{}.", number)),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
