//! User namespace support on the host.
//!
//! Unprivileged user namespaces can be switched off by sysctl. When a launch
//! fails with `EPERM` or `ENOSPC`, these settings usually explain why.

use std::path::Path;

use nslaunch_common::constants::{MAX_USER_NAMESPACES_PATH, UNPRIVILEGED_USERNS_CLONE_PATH};

/// Host settings that govern user namespace creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserNamespaceSupport {
    /// Value of `user.max_user_namespaces`, if readable.
    pub max_user_namespaces: Option<u64>,
    /// Value of `kernel.unprivileged_userns_clone`, if the kernel has it.
    pub unprivileged_clone: Option<bool>,
}

impl UserNamespaceSupport {
    /// Parses raw sysctl contents. Unparseable values are treated as unknown.
    pub fn from_sysctls(max_user_namespaces: Option<&str>, unprivileged_clone: Option<&str>) -> Self {
        Self {
            max_user_namespaces: max_user_namespaces.and_then(|v| v.trim().parse().ok()),
            unprivileged_clone: unprivileged_clone
                .and_then(|v| v.trim().parse::<u8>().ok())
                .map(|v| v != 0),
        }
    }

    /// Names the setting that disables user namespaces, if any.
    pub fn disabled_reason(&self) -> Option<String> {
        if self.max_user_namespaces == Some(0) {
            return Some("user.max_user_namespaces is 0".into());
        }
        if self.unprivileged_clone == Some(false) {
            return Some("kernel.unprivileged_userns_clone is 0".into());
        }
        None
    }
}

/// Reads the host's user namespace sysctls.
pub fn probe_support() -> UserNamespaceSupport {
    let support = probe_at(
        Path::new(MAX_USER_NAMESPACES_PATH),
        Path::new(UNPRIVILEGED_USERNS_CLONE_PATH),
    );
    tracing::debug!(?support, "probed user namespace support");
    support
}

fn probe_at(max_path: &Path, clone_path: &Path) -> UserNamespaceSupport {
    let max = std::fs::read_to_string(max_path).ok();
    let clone = std::fs::read_to_string(clone_path).ok();
    UserNamespaceSupport::from_sysctls(max.as_deref(), clone.as_deref())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_reported() {
        let support = UserNamespaceSupport::from_sysctls(Some("0\n"), None);
        assert_eq!(support.max_user_namespaces, Some(0));
        assert_eq!(
            support.disabled_reason().as_deref(),
            Some("user.max_user_namespaces is 0")
        );
    }

    #[test]
    fn disabled_unprivileged_clone_is_reported() {
        let support = UserNamespaceSupport::from_sysctls(Some("63204\n"), Some("0\n"));
        assert_eq!(support.unprivileged_clone, Some(false));
        assert_eq!(
            support.disabled_reason().as_deref(),
            Some("kernel.unprivileged_userns_clone is 0")
        );
    }

    #[test]
    fn enabled_host_has_no_reason() {
        let support = UserNamespaceSupport::from_sysctls(Some("63204"), Some("1"));
        assert_eq!(support.disabled_reason(), None);
    }

    #[test]
    fn garbage_is_unknown() {
        let support = UserNamespaceSupport::from_sysctls(Some("lots"), Some(""));
        assert_eq!(support, UserNamespaceSupport::default());
    }

    #[test]
    fn missing_files_probe_as_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let support = probe_at(&dir.path().join("absent"), &dir.path().join("also-absent"));
        assert_eq!(support, UserNamespaceSupport::default());
    }

    #[test]
    fn probe_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let max = dir.path().join("max_user_namespaces");
        let clone = dir.path().join("unprivileged_userns_clone");
        std::fs::write(&max, "15000\n").unwrap();
        std::fs::write(&clone, "0\n").unwrap();

        let support = probe_at(&max, &clone);
        assert_eq!(support.max_user_namespaces, Some(15000));
        assert_eq!(support.unprivileged_clone, Some(false));
    }
}
