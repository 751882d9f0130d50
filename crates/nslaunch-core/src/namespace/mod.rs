//! Namespace selection for newly created children.
//!
//! An [`IsolationDirective`] lists which namespaces the child gets fresh
//! copies of. It is handed to the launcher explicitly and attached to the
//! child's creation attributes, so the namespaces exist before the target
//! program image starts.

pub mod user;

use std::fmt;

/// A namespace kind that can be created for a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    /// User and group ID isolation.
    User,
}

impl NamespaceKind {
    /// Short name, as used under `/proc/<pid>/ns/`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }

    /// The `clone(2)`/`unshare(2)` flag creating this namespace.
    #[cfg(target_os = "linux")]
    pub const fn clone_flag(self) -> nix::sched::CloneFlags {
        match self {
            Self::User => nix::sched::CloneFlags::CLONE_NEWUSER,
        }
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of namespaces to create for a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationDirective {
    kinds: Vec<NamespaceKind>,
}

impl IsolationDirective {
    /// A directive requesting only a new user namespace.
    pub fn user() -> Self {
        Self {
            kinds: vec![NamespaceKind::User],
        }
    }

    /// Requested namespace kinds.
    pub fn kinds(&self) -> &[NamespaceKind] {
        &self.kinds
    }

    /// Returns `true` if `kind` is requested.
    pub fn requests(&self, kind: NamespaceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Combined clone flags for every requested kind.
    #[cfg(target_os = "linux")]
    pub fn clone_flags(&self) -> nix::sched::CloneFlags {
        self.kinds
            .iter()
            .fold(nix::sched::CloneFlags::empty(), |acc, k| acc | k.clone_flag())
    }

    /// Attaches the directive to `command`.
    ///
    /// The forked child calls `unshare(2)` with [`Self::clone_flags`] just
    /// before `execve(2)`. If that fails, the exec never happens and the
    /// error is reported back through [`std::process::Command::spawn`], so
    /// the target program never runs with the parent's namespaces.
    #[cfg(target_os = "linux")]
    pub fn attach(&self, command: &mut std::process::Command) {
        use std::os::unix::process::CommandExt;

        let flags = self.clone_flags();
        tracing::debug!(namespaces = %self, ?flags, "attaching isolation directive");

        // SAFETY: the hook runs in the forked child between fork and exec.
        // It captures only a `CloneFlags` value and issues a single
        // unshare(2) syscall, which neither allocates nor takes locks.
        #[allow(unsafe_code)]
        let _ = unsafe {
            command.pre_exec(move || nix::sched::unshare(flags).map_err(std::io::Error::from))
        };
    }
}

impl fmt::Display for IsolationDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.kinds.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}
