//! Output side of careen: repair request assembly for the oracle and
//! formatters for everything the CLI prints.
//!
//! Provides three output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **LLM** (`--llm`): Compact format for AI coding agents
//! - **Human** (default): Formatted output for terminal users

pub mod human;
pub mod json;
pub mod llm;
pub mod prompt;
pub mod request;
pub mod templates;

use careen_enforce::types::CheckResult;

pub use templates::{ConfigLoadError, TemplateSource};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_rules(&self) -> String;
}
