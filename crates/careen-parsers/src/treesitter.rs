use tree_sitter::{Language, Node, Parser, Tree};

/// A parsed source sample: the original text plus its syntax tree.
///
/// Construction is the only fallible step in the whole validation path.
/// Once a `SourceModel` exists, every downstream traversal is infallible.
#[derive(Debug)]
pub struct SourceModel {
    source: String,
    tree: Tree,
}

impl SourceModel {
    /// Parse Python source text. Fails with [`ParseError::Syntax`] when the
    /// tree contains error or missing nodes — tree-sitter parses greedily,
    /// so syntactic validity is an explicit post-pass over the tree.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let lang: Language = tree_sitter_python::LANGUAGE.into();
        parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;

        if tree.root_node().has_error() {
            let line = first_error_node(tree.root_node())
                .map(|n| n.start_position().row as u32 + 1)
                .unwrap_or(1);
            return Err(ParseError::Syntax { line });
        }

        Ok(Self {
            source: source.to_string(),
            tree,
        })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("syntax error at line {line}")]
    Syntax { line: u32 },
}

/// The closed set of node kinds the rule engine dispatches over. Everything
/// the catalog does not inspect directly collapses into `Other`, which only
/// forwards traversal to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    FunctionDef,
    ClassDef,
    Assign,
    GlobalDecl,
    Other,
}

/// Map a tree-sitter node kind onto the engine's dispatch set.
pub fn classify(kind: &str) -> SyntaxKind {
    match kind {
        "function_definition" => SyntaxKind::FunctionDef,
        "class_definition" => SyntaxKind::ClassDef,
        "assignment" => SyntaxKind::Assign,
        "global_statement" => SyntaxKind::GlobalDecl,
        _ => SyntaxKind::Other,
    }
}

pub fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// 1-based line of a node's first character.
pub fn node_line(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

/// True for literal constants: numbers, strings, booleans, `None`.
pub fn is_constant_literal(kind: &str) -> bool {
    matches!(
        kind,
        "integer" | "float" | "string" | "concatenated_string" | "true" | "false" | "none"
    )
}

/// A parsed numeric literal: its value for comparisons and a normalized
/// display form for messages (hex and underscored literals print as their
/// decimal value, matching how a reader sees the number).
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
    pub display: String,
}

/// Parse an `integer` or `float` node. Returns `None` for every other kind
/// and for imaginary literals, which are complex values, not numbers the
/// magic-number rule covers.
pub fn numeric_literal(node: Node<'_>, source: &[u8]) -> Option<NumericLiteral> {
    let text = node_text(node, source).replace('_', "");
    match node.kind() {
        "integer" => {
            let value = parse_python_int(&text)?;
            Some(NumericLiteral {
                value: value as f64,
                display: value.to_string(),
            })
        }
        "float" => {
            let value: f64 = text.parse().ok()?;
            Some(NumericLiteral {
                value,
                display: text,
            })
        }
        _ => None,
    }
}

fn parse_python_int(text: &str) -> Option<i128> {
    let lower = text.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        i128::from_str_radix(hex, 16).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i128::from_str_radix(oct, 8).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i128::from_str_radix(bin, 2).ok()
    } else {
        lower.parse().ok()
    }
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}
