//! Preflight - readiness verification before launching a system.
//!
//! Preflight reads an ordered, sectioned check plan from
//! `.preflight/config.yml`, probes environment variables, TCP ports, files,
//! structured data files and importable modules, and reports a verdict with
//! an exit code suitable for gating a launch script.
//!
//! # Modules
//!
//! - [`checks`] - Check plan, adapters, capability probes and the runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Verdict computation and report rendering
//! - [`secrets`] - Secret variable detection
//! - [`ui`] - Terminal output, status glyphs and spinners
//!
//! # Example
//!
//! ```
//! use preflight::checks::{Check, CheckRunner, Environment, ProbeRegistry};
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! let env = Environment::from_vars(HashMap::from([(
//!     "MODE".to_string(),
//!     "lite".to_string(),
//! )]));
//! let probes = ProbeRegistry::new();
//! let runner = CheckRunner::new(Path::new("."), &env, &probes);
//!
//! let report = runner.run(&[Check::env_var("MODE"), Check::env_var("APP_PATH")]);
//! assert_eq!(report.len(), 2);
//! assert!(report.is_blocked());
//! assert!(report.results()[1].message.contains("not set"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod secrets;
pub mod ui;

pub use error::{PreflightError, Result};
