//! The nine catalog checks. Each function inspects one derived record or
//! statement and returns the violations it triggers; the engine decides
//! where and in which order they run.

use careen_core::types::{LineRef, RuleId};
use careen_parsers::treesitter::{is_constant_literal, NumericLiteral};
use careen_parsers::{ClassRecord, FunctionRecord};

use crate::types::Violation;

const MAX_FUNCTION_LINES: u32 = 20;
const MAX_POSITIONAL_PARAMS: u32 = 3;
const MAX_CLASS_MEMBERS: u32 = 10;

/// R002: function body spans more than 20 lines.
pub fn check_function_length(func: &FunctionRecord) -> Option<Violation> {
    let lines = func.body_lines();
    if lines <= MAX_FUNCTION_LINES {
        return None;
    }
    Some(Violation {
        rule: RuleId::FunctionLength,
        line: LineRef::Line(func.line_start),
        message: format!("Function '{}' is too long ({} lines).", func.name, lines),
    })
}

/// R003: function name is not lowercase_with_underscores.
pub fn check_function_naming(func: &FunctionRecord) -> Option<Violation> {
    if is_snake_case(&func.name) {
        return None;
    }
    Some(Violation {
        rule: RuleId::FunctionNaming,
        line: LineRef::Line(func.line_start),
        message: format!(
            "Function '{}' does not follow snake_case naming.",
            func.name
        ),
    })
}

/// R004: more than 3 declared positional parameters.
pub fn check_parameter_count(func: &FunctionRecord) -> Option<Violation> {
    if func.positional_params <= MAX_POSITIONAL_PARAMS {
        return None;
    }
    Some(Violation {
        rule: RuleId::ParameterCount,
        line: LineRef::Line(func.line_start),
        message: format!(
            "Function '{}' has too many parameters ({}).",
            func.name, func.positional_params
        ),
    })
}

/// R005: a `global` declaration inside a function body. One violation per
/// declared name.
pub fn check_global_declaration(name: &str, line: u32) -> Violation {
    Violation {
        rule: RuleId::GlobalMutation,
        line: LineRef::Line(line),
        message: format!("Global variable '{name}' modified. Avoid side effects."),
    }
}

/// R006: assignment right-hand side is a numeric literal outside {0, 1}.
pub fn check_magic_number(literal: &NumericLiteral, line: u32) -> Option<Violation> {
    if literal.value == 0.0 || literal.value == 1.0 {
        return None;
    }
    Some(Violation {
        rule: RuleId::MagicNumber,
        line: LineRef::Line(line),
        message: format!(
            "Magic number detected: {}. Use a named constant.",
            literal.display
        ),
    })
}

/// R008: a `return` directly in a function body yields a literal constant.
/// `value_kind` is the node kind of the returned expression, `None` for a
/// bare `return`.
pub fn check_return_constant(
    function: &str,
    value_kind: Option<&str>,
    line: u32,
) -> Option<Violation> {
    let kind = value_kind?;
    if !is_constant_literal(kind) {
        return None;
    }
    Some(Violation {
        rule: RuleId::ErrorCodeReturn,
        line: LineRef::Line(line),
        message: format!(
            "Function '{function}' returns an error code instead of raising an exception."
        ),
    })
}

/// R010: more than 10 direct class body members.
pub fn check_class_size(class: &ClassRecord) -> Option<Violation> {
    if class.member_count <= MAX_CLASS_MEMBERS {
        return None;
    }
    Some(Violation {
        rule: RuleId::ClassSize,
        line: LineRef::Line(class.line),
        message: format!(
            "Class '{}' has too many methods/attributes. May violate SRP.",
            class.name
        ),
    })
}

/// R011: more than one declared base type.
pub fn check_base_count(class: &ClassRecord) -> Option<Violation> {
    if class.base_count <= 1 {
        return None;
    }
    Some(Violation {
        rule: RuleId::MultipleInheritance,
        line: LineRef::Line(class.line),
        message: format!(
            "Class '{}' has multiple base classes. Prefer composition over deep inheritance.",
            class.name
        ),
    })
}

/// R012: setup/process/cleanup ordering over the first three functions in
/// traversal order. Skipped entirely below three functions; the middle
/// function is never checked. Emitted without a line — the violation spans
/// the whole file.
pub fn check_function_order(order: &[String]) -> Vec<Violation> {
    if order.len() < 3 {
        return Vec::new();
    }

    let mut violations = Vec::new();
    let setup = &order[0];
    let cleanup = &order[2];

    if !(setup.starts_with("init") || setup.starts_with("setup")) {
        violations.push(Violation {
            rule: RuleId::FunctionOrder,
            line: LineRef::Unknown,
            message: format!("Function '{setup}' should be a setup function."),
        });
    }
    if !(cleanup.starts_with("clean") || cleanup.starts_with("close")) {
        violations.push(Violation {
            rule: RuleId::FunctionOrder,
            line: LineRef::Unknown,
            message: format!("Function '{cleanup}' should be a cleanup function."),
        });
    }
    violations
}

fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
