//! The repair side of careen: a bounded validate, fix, revalidate loop
//! around an external text-generation oracle.
//!
//! The loop never synthesizes code itself. Every candidate fix comes from
//! the oracle; this crate decides when to ask, what to ask with, and when
//! to stop.

pub mod controller;
pub mod oracle;
pub mod pipeline;
pub mod sanitize;

pub use controller::{RepairController, RepairError, RepairReport, Termination};
pub use oracle::Oracle;
pub use pipeline::CleanCodePipeline;
