//! The isolated launcher.
//!
//! Starts one child with a fresh set of namespaces, binds its standard
//! streams to ours, blocks until it exits, and reports the outcome. There
//! is no timeout, retry, or cancellation: once the child is running the
//! launcher only waits.

use nslaunch_common::error::Result;
use nslaunch_common::types::{LaunchPhase, LaunchRequest};
use nslaunch_core::namespace::IsolationDirective;

/// A single launch in progress.
#[derive(Debug)]
pub struct Launcher {
    request: LaunchRequest,
    directive: IsolationDirective,
    phase: LaunchPhase,
}

impl Launcher {
    /// Prepares a launch of `request` in the namespaces named by `directive`.
    pub const fn new(request: LaunchRequest, directive: IsolationDirective) -> Self {
        Self {
            request,
            directive,
            phase: LaunchPhase::NotStarted,
        }
    }

    /// The request being launched.
    pub const fn request(&self) -> &LaunchRequest {
        &self.request
    }

    /// The namespaces the child will be created in.
    pub const fn directive(&self) -> &IsolationDirective {
        &self.directive
    }

    /// Current phase.
    pub const fn phase(&self) -> LaunchPhase {
        self.phase
    }

    fn advance(&mut self, next: LaunchPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase transition {} -> {next}",
            self.phase
        );
        tracing::debug!(from = %self.phase, to = %next, "launch phase");
        self.phase = next;
    }

    /// Runs the child to completion.
    ///
    /// Consumes the launcher: a launch is attempted at most once.
    ///
    /// # Errors
    ///
    /// Returns a `LaunchFailure` if the program cannot be found, the child
    /// or its namespaces cannot be created, waiting fails, or the child
    /// exits with a non-zero status or is killed by a signal.
    #[cfg(target_os = "linux")]
    pub fn run(mut self) -> Result<()> {
        use std::os::unix::process::CommandExt;
        use std::process::{Command, Stdio};

        use nslaunch_common::error::FailureCause;

        use crate::{resolve, status};

        let program = self.request.program_display();
        let path = resolve::resolve_program(&self.request)?;

        let mut command = Command::new(&path);
        let _ = command
            .arg0(self.request.program())
            .args(self.request.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        self.directive.attach(&mut command);
        self.advance(LaunchPhase::NamespaceRequested);

        tracing::info!(
            program = %program,
            path = %path.display(),
            args = ?self.request.args(),
            namespaces = %self.directive,
            "spawning child"
        );
        let mut child = command.spawn().map_err(|source| {
            tracing::warn!(program = %program, error = %source, "spawn failed");
            FailureCause::Spawn {
                hint: spawn_hint(&source),
                program: program.clone(),
                source,
            }
        })?;
        self.advance(LaunchPhase::Running);
        tracing::debug!(pid = child.id(), "child running");

        let wait_status = child.wait().map_err(|source| FailureCause::Wait {
            program: program.clone(),
            source,
        })?;
        let exit = status::classify(wait_status);
        self.advance(LaunchPhase::Exited {
            success: exit.success(),
        });

        status::into_result(exit, &program).map_err(|cause| {
            tracing::warn!(cause = %cause, "child did not succeed");
            cause.into()
        })
    }

    /// Stub for non-Linux platforms.
    ///
    /// # Errors
    ///
    /// Always returns an error: user namespaces require Linux.
    #[cfg(not(target_os = "linux"))]
    pub fn run(self) -> Result<()> {
        Err(nslaunch_common::error::FailureCause::Unsupported {
            message: "user namespaces require Linux".into(),
        }
        .into())
    }
}

/// Host hint for spawn errors that typically mean user namespaces are off.
#[cfg(target_os = "linux")]
fn spawn_hint(err: &std::io::Error) -> Option<String> {
    use nix::errno::Errno;

    let errno = Errno::from_raw(err.raw_os_error()?);
    if !matches!(errno, Errno::EPERM | Errno::ENOSPC | Errno::EINVAL) {
        return None;
    }
    nslaunch_core::namespace::user::probe_support().disabled_reason()
}

/// Validates `argv` and runs it in the namespaces named by `directive`.
///
/// `argv[0]` is the program; the rest are its arguments, passed verbatim.
///
/// # Errors
///
/// Returns `InvalidArguments` if `argv` is empty, before anything is
/// created. Returns `LaunchFailure` as described on [`Launcher::run`].
pub fn launch<I, S>(argv: I, directive: IsolationDirective) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString>,
{
    let request = LaunchRequest::new(argv)?;
    Launcher::new(request, directive).run()
}
