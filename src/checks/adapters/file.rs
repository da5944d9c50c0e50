//! File existence checks.

use super::CheckContext;
use crate::checks::error::{CheckError, Outcome};

/// Verify a file or directory exists.
pub fn check(
    ctx: &CheckContext<'_>,
    path: &str,
    anchor_env: Option<&str>,
) -> Result<Outcome, CheckError> {
    let full_path = ctx.resolve_path(path, anchor_env)?;

    if !full_path.exists() {
        return Err(CheckError::FileMissing { path: full_path });
    }

    let outcome = Outcome::new(full_path.display().to_string());
    if full_path.is_dir() {
        Ok(outcome.with_detail("directory"))
    } else {
        Ok(outcome)
    }
}
