//! The careen rule engine: one pre-order traversal of a parsed source
//! model, nine fixed checks, violations in traversal order.
//!
//! The engine holds no state between runs. Every call to
//! [`engine::ValidationEngine::validate`] builds fresh accumulators, so
//! independent samples can never contaminate each other.

pub mod engine;
pub mod types;
pub mod violations;

pub use engine::ValidationEngine;
pub use types::{CheckResult, Violation};
