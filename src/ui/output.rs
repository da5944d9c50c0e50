//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show what each passing check probed.
    Verbose,
    /// One line per check plus the summary.
    #[default]
    Normal,
    /// Failures and the summary only.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether passing checks are printed.
    pub fn shows_passing(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether probe targets are printed under each result.
    pub fn shows_targets(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether spinners run while a check is in flight.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
