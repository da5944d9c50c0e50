//! Environment variable checks.

use super::CheckContext;
use crate::checks::error::{CheckError, Outcome};
use crate::checks::paths::{expand_home, resolve_against};
use crate::secrets::describe_secret;

/// Verify `var` is set and, with `expects_path`, that it names an existing
/// path.
pub fn check(
    ctx: &CheckContext<'_>,
    var: &str,
    expects_path: bool,
    secret: bool,
) -> Result<Outcome, CheckError> {
    let value = ctx.env.get(var).ok_or_else(|| CheckError::MissingEnvVar {
        var: var.to_string(),
    })?;

    if expects_path {
        let path = resolve_against(ctx.project_root, &expand_home(value));
        return match (path.exists(), secret) {
            (true, false) => Ok(Outcome::new(path.display().to_string())),
            (true, true) => Ok(Outcome::new(format!(
                "{} is {}, path exists",
                var,
                describe_secret(value)
            ))),
            (false, false) => Err(CheckError::PathNotFound {
                var: var.to_string(),
                path,
            }),
            (false, true) => Err(CheckError::SecretPathNotFound {
                var: var.to_string(),
            }),
        };
    }

    if secret {
        Ok(Outcome::new(format!("{} is {}", var, describe_secret(value))))
    } else {
        Ok(Outcome::new(format!("{} is set to {}", var, value)))
    }
}
