// Violation ordering follows the pre-order traversal, not source lines.
use careen_core::types::{LineRef, RuleId};
use careen_enforce::{CheckResult, ValidationEngine};

fn validate(source: &str) -> CheckResult {
    ValidationEngine::new()
        .validate(source)
        .expect("source should parse")
}

#[test]
fn test_flawed_function_yields_three_violations_in_order() {
    let source = format!("def DoWork(a, b, c, d):\n{}", "    x = a\n".repeat(25));
    let result = validate(&source);

    let rules: Vec<RuleId> = result.violations.iter().map(|v| v.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleId::FunctionLength,
            RuleId::FunctionNaming,
            RuleId::ParameterCount,
        ]
    );
}

#[test]
fn test_function_checks_fire_before_body_discoveries() {
    // The magic number sits on an earlier line than the constant return,
    // but the function's direct-body return check runs first.
    let source = "\
def report():
    return 0

def Broken():
    value = 7
    return value
";
    let result = validate(source);
    let rules: Vec<RuleId> = result.violations.iter().map(|v| v.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleId::ErrorCodeReturn,
            RuleId::FunctionNaming,
            RuleId::MagicNumber,
        ]
    );
}

#[test]
fn test_ordering_check_runs_after_traversal() {
    let source = "\
def alpha():
    pass

def beta():
    value = 9

def gamma():
    pass
";
    let result = validate(source);
    let rules: Vec<RuleId> = result.violations.iter().map(|v| v.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleId::MagicNumber,
            RuleId::FunctionOrder,
            RuleId::FunctionOrder,
        ]
    );
    assert_eq!(result.violations[0].line, LineRef::Line(5));
    assert_eq!(result.violations[1].line, LineRef::Unknown);
}

#[test]
fn test_nested_functions_join_traversal_order() {
    let source = "\
def setup_run():
    pass

def outer():
    def close_inner():
        pass
    pass

def unrelated():
    pass
";
    let result = validate(source);
    assert_eq!(result.functions_analyzed, 4);
    // close_inner is the third function traversed, so the ordering check
    // passes even though the third top-level function is unrelated.
    assert!(result.violations.is_empty());
}
