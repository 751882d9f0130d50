//! # nslaunch-core
//!
//! Low-level Linux isolation primitives for the launcher.
//!
//! This crate provides:
//! - **Isolation directives**: the immutable set of namespace kinds a child
//!   is created in, and how that set is attached to process creation.
//! - **Host probing**: whether the kernel permits unprivileged user namespaces.
//!
//! The one unsafe call (registering the pre-exec hook) is wrapped with a
//! `// SAFETY:` note.

pub mod namespace;
