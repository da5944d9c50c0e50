//! Turning a [`Report`](crate::checks::Report) into a verdict and output.
//!
//! - [`summary`] computes the verdict and exit code (pure)
//! - [`human`] renders results and the summary through a
//!   [`UserInterface`](crate::ui::UserInterface)
//! - [`json`] writes a machine-readable document

pub mod human;
pub mod json;
pub mod summary;

pub use human::HumanRenderer;
pub use json::JsonFormatter;
pub use summary::{Summary, Verdict};
