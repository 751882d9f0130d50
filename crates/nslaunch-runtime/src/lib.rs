//! # nslaunch-runtime
//!
//! Launches one program inside freshly created namespaces, with its
//! standard streams bound to the launcher's, and waits for it.
//!
//! Flow: validate the request, resolve the program, attach the isolation
//! directive, spawn, wait, classify the exit status.

pub mod launcher;
pub mod resolve;
pub mod status;

pub use launcher::{Launcher, launch};
