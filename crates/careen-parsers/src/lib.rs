//! Source model for careen: tree-sitter parsing of generated Python plus
//! the derived per-entity records the rule engine consumes.
//!
//! Parsing is strict — tree-sitter itself never refuses input, so
//! [`treesitter::SourceModel::parse`] walks the tree for error and missing
//! nodes and reports the first one as a syntax error. Downstream consumers
//! can therefore assume a well-formed tree.

pub mod source;
pub mod treesitter;

pub use source::{ClassRecord, FunctionRecord};
pub use treesitter::{ParseError, SourceModel, SyntaxKind};
