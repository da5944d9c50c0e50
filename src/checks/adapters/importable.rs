//! Importability checks, dispatched to a capability probe.

use super::CheckContext;
use crate::checks::error::{CheckError, Outcome};
use crate::checks::probe::ProbeContext;

/// Verify `module` is loadable through the probe named `probe`.
pub fn check(ctx: &CheckContext<'_>, module: &str, probe: &str) -> Result<Outcome, CheckError> {
    let Some(capability) = ctx.probes.get(probe) else {
        return Err(CheckError::ImportFailure {
            module: module.to_string(),
            message: format!("unknown capability probe '{}'", probe),
        });
    };

    let probe_ctx = ProbeContext {
        project_root: ctx.project_root,
        env: ctx.env,
    };
    capability.probe(module, &probe_ctx)
}
