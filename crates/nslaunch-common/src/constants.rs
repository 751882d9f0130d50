//! Program-wide constants.

/// Application name used in diagnostics.
pub const APP_NAME: &str = "nslaunch";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "nslaunch";

/// Filter applied to log output when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Sysctl holding the per-user limit on user namespaces.
pub const MAX_USER_NAMESPACES_PATH: &str = "/proc/sys/user/max_user_namespaces";

/// Debian/Ubuntu sysctl gating unprivileged user namespace creation.
pub const UNPRIVILEGED_USERNS_CLONE_PATH: &str = "/proc/sys/kernel/unprivileged_userns_clone";
