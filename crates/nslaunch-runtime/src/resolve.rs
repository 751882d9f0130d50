//! Program lookup.

use std::path::PathBuf;

use nslaunch_common::error::{FailureCause, Result};
use nslaunch_common::types::LaunchRequest;

/// Resolves the executable for `request`.
///
/// A program containing `/` is used as a literal path and left for the
/// kernel to reject if it does not exist. Any other name is searched for in
/// `PATH`, the same way a shell would.
///
/// # Errors
///
/// Returns a `LaunchFailure` with cause [`FailureCause::NotFound`] if the
/// name is not found on the search path.
pub fn resolve_program(request: &LaunchRequest) -> Result<PathBuf> {
    if request.is_path() {
        return Ok(PathBuf::from(request.program()));
    }

    which::which(request.program()).map_err(|e| {
        tracing::warn!(program = %request.program_display(), error = %e, "program lookup failed");
        FailureCause::NotFound {
            program: request.program_display(),
        }
        .into()
    })
}
