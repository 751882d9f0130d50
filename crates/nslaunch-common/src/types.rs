//! Domain types for a single launch.

use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::error::{LaunchError, Result};

/// A validated program name and its argument list.
///
/// The first element of the input is the program, looked up on the search
/// path unless it contains a `/`. The remaining elements are handed to the
/// program untouched: no globbing, quoting, or other shell interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    program: OsString,
    args: Vec<OsString>,
}

impl LaunchRequest {
    /// Builds a request from an ordered argument sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::InvalidArguments`] if the sequence is empty.
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut iter = argv.into_iter().map(Into::into);
        let program = iter
            .next()
            .ok_or_else(|| LaunchError::invalid_arguments("no target executable given"))?;
        Ok(Self {
            program,
            args: iter.collect(),
        })
    }

    /// Program name or path as supplied.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments passed to the program, excluding the program itself.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Whether the program is a literal path rather than a name to search for.
    pub fn is_path(&self) -> bool {
        self.program.as_encoded_bytes().contains(&b'/')
    }

    /// Lossy program name for diagnostics.
    pub fn program_display(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Progress of a launch.
///
/// Transitions only move forward: `NotStarted`, `NamespaceRequested`,
/// `Running`, `Exited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Nothing has been acquired yet.
    NotStarted,
    /// The child descriptor carries the isolation directive.
    NamespaceRequested,
    /// The child is executing.
    Running,
    /// The child has terminated.
    Exited {
        /// Whether it exited with status zero.
        success: bool,
    },
}

impl LaunchPhase {
    /// Returns `true` if `next` directly follows `self`.
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::NamespaceRequested)
                | (Self::NamespaceRequested, Self::Running)
                | (Self::Running, Self::Exited { .. })
        )
    }
}

impl fmt::Display for LaunchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not-started"),
            Self::NamespaceRequested => write!(f, "namespace-requested"),
            Self::Running => write!(f, "running"),
            Self::Exited { success: true } => write!(f, "exited(success)"),
            Self::Exited { success: false } => write!(f, "exited(failure)"),
        }
    }
}

/// How the child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exit status zero.
    Success,
    /// Non-zero exit status.
    Code(i32),
    /// Terminated by the given signal number.
    Signal(i32),
}

impl ChildExit {
    /// Returns `true` only for [`ChildExit::Success`].
    pub const fn success(self) -> bool {
        matches!(self, Self::Success)
    }
}
