//! Core vocabulary for careen: the clean-code rule catalog, line
//! references, and configuration loading.
//!
//! Everything else in the workspace builds on these types. The catalog is a
//! closed set — rules are defined here and nowhere else, and no mechanism
//! exists to register additional ones at runtime.

pub mod config;
pub mod types;
