//! Child exit status classification.

use std::process::ExitStatus;

use nslaunch_common::error::FailureCause;
use nslaunch_common::types::ChildExit;

/// Maps a wait status onto [`ChildExit`].
#[cfg(unix)]
pub fn classify(status: ExitStatus) -> ChildExit {
    use std::os::unix::process::ExitStatusExt;

    if status.success() {
        return ChildExit::Success;
    }
    match (status.code(), status.signal()) {
        (Some(code), _) => ChildExit::Code(code),
        (None, Some(signal)) => ChildExit::Signal(signal),
        (None, None) => ChildExit::Code(status.into_raw()),
    }
}

/// Converts a child's exit into the launch outcome.
///
/// # Errors
///
/// Returns [`FailureCause::Exited`] for a non-zero status and
/// [`FailureCause::Signaled`] for a signal.
pub fn into_result(exit: ChildExit, program: &str) -> Result<(), FailureCause> {
    match exit {
        ChildExit::Success => Ok(()),
        ChildExit::Code(code) => Err(FailureCause::Exited {
            program: program.to_owned(),
            code,
        }),
        ChildExit::Signal(signal) => Err(FailureCause::Signaled {
            program: program.to_owned(),
            signal,
            name: signal_name(signal),
        }),
    }
}

#[cfg(target_os = "linux")]
fn signal_name(signal: i32) -> Option<String> {
    nix::sys::signal::Signal::try_from(signal)
        .ok()
        .map(|s| s.as_str().to_owned())
}

#[cfg(not(target_os = "linux"))]
const fn signal_name(_signal: i32) -> Option<String> {
    None
}
