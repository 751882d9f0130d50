//! # nslaunch-common
//!
//! Shared error taxonomy, launch request types, and constants used across
//! the nslaunch workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate.

pub mod constants;
pub mod error;
pub mod types;
