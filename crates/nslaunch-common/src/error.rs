//! Error taxonomy for the launcher.
//!
//! Every failure is fatal to the launcher. There are two kinds: the caller
//! gave no target executable, or the target could not be launched or did
//! not succeed. [`FailureCause`] carries the detail for the diagnostic.

use std::io;

use thiserror::Error;

/// Top-level error returned by a launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No target executable was supplied.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        /// Description of what is missing.
        message: String,
    },

    /// The child could not be started, or it ran and did not succeed.
    #[error("launch failed: {cause}")]
    LaunchFailure {
        /// Underlying reason.
        cause: FailureCause,
    },
}

impl LaunchError {
    /// Builds an [`LaunchError::InvalidArguments`] error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Returns `true` for [`LaunchError::InvalidArguments`].
    pub const fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidArguments { .. })
    }

    /// Returns the failure cause, if this is a [`LaunchError::LaunchFailure`].
    pub const fn cause(&self) -> Option<&FailureCause> {
        match self {
            Self::InvalidArguments { .. } => None,
            Self::LaunchFailure { cause } => Some(cause),
        }
    }
}

impl From<FailureCause> for LaunchError {
    fn from(cause: FailureCause) -> Self {
        Self::LaunchFailure { cause }
    }
}

/// Why a launch failed.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The program name could not be found on the search path.
    #[error("executable not found: {program}")]
    NotFound {
        /// Name as given by the caller.
        program: String,
    },

    /// Creating the child, its namespace, or replacing its image failed.
    #[error("failed to start {program}: {source}{}", hint_suffix(.hint))]
    Spawn {
        /// Name as given by the caller.
        program: String,
        /// Error reported by the operating system.
        source: io::Error,
        /// Host configuration hint, when one explains the failure.
        hint: Option<String>,
    },

    /// Waiting for the child failed.
    #[error("failed to wait for {program}: {source}")]
    Wait {
        /// Name as given by the caller.
        program: String,
        /// Error reported by the operating system.
        source: io::Error,
    },

    /// The child exited with a non-zero status.
    #[error("{program} exited with status {code}")]
    Exited {
        /// Name as given by the caller.
        program: String,
        /// Exit status of the child.
        code: i32,
    },

    /// The child was terminated by a signal.
    #[error("{program} was terminated by signal {}", signal_label(.signal, .name))]
    Signaled {
        /// Name as given by the caller.
        program: String,
        /// Signal number.
        signal: i32,
        /// Symbolic signal name, when known.
        name: Option<String>,
    },

    /// User namespaces are not available on this platform.
    #[error("unsupported platform: {message}")]
    Unsupported {
        /// Description of the missing facility.
        message: String,
    },
}

#[allow(clippy::ref_option)]
fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref()
        .map_or_else(String::new, |h| format!(" (hint: {h})"))
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn signal_label(signal: &i32, name: &Option<String>) -> String {
    name.as_ref()
        .map_or_else(|| signal.to_string(), |n| format!("{signal} ({n})"))
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LaunchError>;
