//! Readiness checks.
//!
//! A plan of [`Check`]s is built from config, run in order by the
//! [`CheckRunner`], and collected into a [`Report`]. Each check kind has an
//! adapter in [`adapters`]; importability goes through a named
//! [`CapabilityProbe`].

pub mod adapters;
pub mod check;
pub mod environment;
pub mod error;
pub mod paths;
pub mod plan;
pub mod probe;
pub mod result;
pub mod runner;

pub use check::{Check, CheckKind, DataFormat, Severity};
pub use environment::{EnvFileStatus, Environment};
pub use error::{CheckError, Outcome};
pub use plan::{build_plan, default_check_name, filter_sections, unmatched_sections};
pub use probe::{CapabilityProbe, CommandProbe, ProbeContext, ProbeRegistry, PythonModuleProbe};
pub use result::{CheckResult, Report};
pub use runner::{verify, CheckRunner, RunProgress};
