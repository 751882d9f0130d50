//! Launch tests against real child processes.
//!
//! Tests that need a working user namespace return early when the host
//! forbids unprivileged user namespaces (common inside containers).

#![cfg(target_os = "linux")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::print_stderr)]

use std::os::unix::fs::PermissionsExt;

use nslaunch_common::error::FailureCause;
use nslaunch_core::namespace::IsolationDirective;
use nslaunch_runtime::launch;

fn userns_available() -> bool {
    let ok = launch(["true"], IsolationDirective::user()).is_ok();
    if !ok {
        eprintln!("skipping: user namespaces unavailable on this host");
    }
    ok
}

// ── Argument guard ───────────────────────────────────────────────────

#[test]
fn empty_request_is_invalid_arguments() {
    let err = launch(Vec::<&str>::new(), IsolationDirective::user()).unwrap_err();
    assert!(err.is_invalid_arguments());
    assert!(err.cause().is_none());
}

// ── Resolution failures ──────────────────────────────────────────────

#[test]
fn missing_program_name_is_not_found() {
    let err = launch(["nslaunch-definitely-missing"], IsolationDirective::user()).unwrap_err();
    assert!(matches!(err.cause(), Some(FailureCause::NotFound { .. })));
    assert!(err.to_string().contains("nslaunch-definitely-missing"));
}

#[test]
fn missing_literal_path_fails_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");
    let err = launch([path.as_os_str()], IsolationDirective::user()).unwrap_err();
    let Some(FailureCause::Spawn { source, .. }) = err.cause() else {
        panic!("unexpected error: {err:?}");
    };
    if userns_available() {
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}

// ── Exit propagation ─────────────────────────────────────────────────

#[test]
fn zero_exit_is_success() {
    if !userns_available() {
        return;
    }
    launch(["sh", "-c", "exit 0"], IsolationDirective::user()).expect("child should succeed");
}

#[test]
fn non_zero_exit_is_launch_failure() {
    if !userns_available() {
        return;
    }
    let err = launch(["sh", "-c", "exit 7"], IsolationDirective::user()).unwrap_err();
    assert!(!err.is_invalid_arguments());
    assert!(matches!(
        err.cause(),
        Some(FailureCause::Exited { code: 7, .. })
    ));
}

#[test]
fn signal_is_launch_failure() {
    if !userns_available() {
        return;
    }
    let err = launch(["sh", "-c", "kill -KILL $$"], IsolationDirective::user()).unwrap_err();
    assert!(matches!(
        err.cause(),
        Some(FailureCause::Signaled { signal: 9, .. })
    ));
}

#[test]
fn script_by_literal_path_runs() {
    if !userns_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("exit3.sh");
    std::fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let err = launch([script.as_os_str()], IsolationDirective::user()).unwrap_err();
    assert!(matches!(
        err.cause(),
        Some(FailureCause::Exited { code: 3, .. })
    ));
}

// ── Isolation ────────────────────────────────────────────────────────

#[test]
fn child_gets_its_own_user_namespace() {
    if !userns_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ns");
    // The child compares its user namespace link against ours.
    let ours = std::fs::read_link("/proc/self/ns/user").unwrap();
    let script = format!("readlink /proc/self/ns/user > '{}'", out.display());
    launch(["sh", "-c", script.as_str()], IsolationDirective::user()).unwrap();

    let theirs = std::fs::read_to_string(&out).unwrap();
    assert_ne!(theirs.trim(), ours.to_string_lossy());
}
