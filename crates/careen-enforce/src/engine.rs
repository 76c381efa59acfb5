use std::collections::{HashMap, HashSet};

use tree_sitter::Node;

use careen_parsers::treesitter::{
    classify, node_line, node_text, numeric_literal, SourceModel, SyntaxKind,
};
use careen_parsers::{ClassRecord, FunctionRecord, ParseError};

use crate::types::{CheckResult, Violation};
use crate::violations;

/// Applies the nine catalog checks in one depth-first pre-order traversal.
/// Violations come out in traversal order, not source-line order.
///
/// The engine itself holds nothing between runs; accumulators live in a
/// per-run [`EngineState`], so independent samples cannot contaminate each
/// other.
#[derive(Debug, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate one source sample.
    pub fn validate(&self, source: &str) -> Result<CheckResult, ParseError> {
        let model = SourceModel::parse(source)?;
        Ok(self.validate_model(&model))
    }

    /// Validate an already-parsed model. Never fails: malformed input was
    /// rejected when the model was built.
    pub fn validate_model(&self, model: &SourceModel) -> CheckResult {
        let mut state = EngineState::default();
        walk(model.root(), model.bytes(), true, &mut state);

        let order_violations = violations::check_function_order(&state.function_order);
        state.violations.extend(order_violations);

        CheckResult::new(state.function_order.len() as u32, state.violations)
    }
}

/// Accumulators for exactly one validation run.
///
/// `seen_assignments` and `call_map` are populated during traversal but no
/// current rule consults them.
#[derive(Debug, Default)]
struct EngineState {
    violations: Vec<Violation>,
    #[allow(dead_code)]
    seen_assignments: HashSet<String>,
    #[allow(dead_code)]
    call_map: HashMap<String, Vec<String>>,
    function_order: Vec<String>,
}

fn walk(node: Node<'_>, source: &[u8], module_level: bool, state: &mut EngineState) {
    match classify(node.kind()) {
        SyntaxKind::FunctionDef => visit_function(node, source, state),
        SyntaxKind::ClassDef => visit_class(node, source, state),
        SyntaxKind::Assign => visit_assignment(node, source, module_level, state),
        SyntaxKind::GlobalDecl => visit_global(node, source, state),
        SyntaxKind::Other => walk_children(node, source, module_level, state),
    }
}

fn walk_children(node: Node<'_>, source: &[u8], module_level: bool, state: &mut EngineState) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, source, module_level, state);
    }
}

/// A function's own checks fire before anything discovered deeper in its
/// body: length, naming, and parameter count first, then constant returns
/// in the direct body, then the descent.
fn visit_function(node: Node<'_>, source: &[u8], state: &mut EngineState) {
    let Some(record) = FunctionRecord::from_node(node, source) else {
        return walk_children(node, source, false, state);
    };
    state.function_order.push(record.name.clone());

    state
        .violations
        .extend(violations::check_function_length(&record));
    state
        .violations
        .extend(violations::check_function_naming(&record));
    state
        .violations
        .extend(violations::check_parameter_count(&record));

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for stmt in body.named_children(&mut cursor) {
            match stmt.kind() {
                "return_statement" => {
                    let kind = stmt.named_child(0).map(|n| n.kind());
                    state.violations.extend(violations::check_return_constant(
                        &record.name,
                        kind,
                        node_line(stmt),
                    ));
                }
                "expression_statement" => {
                    if let Some(callee) = direct_call_name(stmt, source) {
                        state
                            .call_map
                            .entry(record.name.clone())
                            .or_default()
                            .push(callee);
                    }
                }
                _ => {}
            }
        }
    }

    walk_children(node, source, false, state);
}

fn visit_class(node: Node<'_>, source: &[u8], state: &mut EngineState) {
    if let Some(record) = ClassRecord::from_node(node, source) {
        state.violations.extend(violations::check_class_size(&record));
        state.violations.extend(violations::check_base_count(&record));
    }
    walk_children(node, source, false, state);
}

fn visit_assignment(node: Node<'_>, source: &[u8], module_level: bool, state: &mut EngineState) {
    // Annotated assignments are a distinct statement form in Python's own
    // AST and bypass the plain-assignment checks.
    if node.child_by_field_name("type").is_some() {
        return walk_children(node, source, module_level, state);
    }

    if let Some(right) = node.child_by_field_name("right") {
        if let Some(literal) = numeric_literal(right, source) {
            state
                .violations
                .extend(violations::check_magic_number(&literal, node_line(node)));
        }
    }

    if module_level {
        if let Some(left) = node.child_by_field_name("left") {
            if left.kind() == "identifier" {
                state
                    .seen_assignments
                    .insert(node_text(left, source).to_string());
            }
        }
    }

    walk_children(node, source, module_level, state);
}

fn visit_global(node: Node<'_>, source: &[u8], state: &mut EngineState) {
    let line = node_line(node);
    let mut cursor = node.walk();
    for name in node.named_children(&mut cursor) {
        if name.kind() == "identifier" {
            state
                .violations
                .push(violations::check_global_declaration(
                    node_text(name, source),
                    line,
                ));
        }
    }
}

fn direct_call_name(stmt: Node<'_>, source: &[u8]) -> Option<String> {
    let expr = stmt.named_child(0)?;
    if expr.kind() != "call" {
        return None;
    }
    let func = expr.child_by_field_name("function")?;
    if func.kind() != "identifier" {
        return None;
    }
    Some(node_text(func, source).to_string())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
