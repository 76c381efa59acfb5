use tree_sitter::Node;

use crate::treesitter::{node_line, node_text};

/// Per-function metadata derived during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    pub line_start: u32,
    pub line_end: u32,
    /// Declared positional parameters. Keyword-only and variadic parameters
    /// are not counted; `self` is.
    pub positional_params: u32,
}

impl FunctionRecord {
    pub fn from_node(node: Node<'_>, source: &[u8]) -> Option<Self> {
        if node.kind() != "function_definition" {
            return None;
        }
        let name = node_text(node.child_by_field_name("name")?, source).to_string();
        let positional_params = node
            .child_by_field_name("parameters")
            .map(count_positional_params)
            .unwrap_or(0);
        Some(Self {
            name,
            line_start: node_line(node),
            line_end: node.end_position().row as u32 + 1,
            positional_params,
        })
    }

    /// Lines the definition spans, counted the way a reader would: the body
    /// below the `def` line.
    pub fn body_lines(&self) -> u32 {
        self.line_end.saturating_sub(self.line_start)
    }
}

/// Per-class metadata derived during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub line: u32,
    /// Direct body statements: methods and attribute statements combined.
    pub member_count: u32,
    /// Declared base types, keyword arguments (`metaclass=...`) excluded.
    pub base_count: u32,
}

impl ClassRecord {
    pub fn from_node(node: Node<'_>, source: &[u8]) -> Option<Self> {
        if node.kind() != "class_definition" {
            return None;
        }
        let name = node_text(node.child_by_field_name("name")?, source).to_string();
        let member_count = node
            .child_by_field_name("body")
            .map(|body| {
                let mut cursor = body.walk();
                body.named_children(&mut cursor)
                    .filter(|c| c.kind() != "comment")
                    .count() as u32
            })
            .unwrap_or(0);
        let base_count = node
            .child_by_field_name("superclasses")
            .map(|args| {
                let mut cursor = args.walk();
                args.named_children(&mut cursor)
                    .filter(|c| !matches!(c.kind(), "keyword_argument" | "comment"))
                    .count() as u32
            })
            .unwrap_or(0);
        Some(Self {
            name,
            line: node_line(node),
            member_count,
            base_count,
        })
    }
}

/// Count declared positional parameters the way Python's own AST does:
/// everything up to the first `*` marker or splat counts, names before a
/// `/` separator live in `posonlyargs` rather than `args` and are dropped.
fn count_positional_params(params: Node<'_>) -> u32 {
    let mut count = 0u32;
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                count += 1;
            }
            "positional_separator" => count = 0,
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }
    count
}
