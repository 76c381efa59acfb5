// Boundary behavior of the catalog rules, driven through the full
// parse-and-validate pipeline.
use careen_core::types::RuleId;
use careen_enforce::{CheckResult, ValidationEngine};

fn validate(source: &str) -> CheckResult {
    ValidationEngine::new()
        .validate(source)
        .expect("source should parse")
}

fn count_rule(result: &CheckResult, rule: RuleId) -> usize {
    result.violations.iter().filter(|v| v.rule == rule).count()
}

#[test]
fn test_r002_exactly_twenty_lines_is_clean() {
    let source = format!("def load():\n{}", "    pass\n".repeat(20));
    let result = validate(&source);
    assert_eq!(count_rule(&result, RuleId::FunctionLength), 0);
}

#[test]
fn test_r002_twenty_one_lines_fires_exactly_once() {
    let source = format!("def load():\n{}", "    pass\n".repeat(21));
    let result = validate(&source);
    assert_eq!(count_rule(&result, RuleId::FunctionLength), 1);
}

#[test]
fn test_r004_three_params_is_clean() {
    let result = validate("def f(a, b, c):\n    pass\n");
    assert_eq!(count_rule(&result, RuleId::ParameterCount), 0);
}

#[test]
fn test_r004_four_params_fires_exactly_once() {
    let result = validate("def f(a, b, c, d):\n    pass\n");
    assert_eq!(count_rule(&result, RuleId::ParameterCount), 1);
}

#[test]
fn test_r006_zero_and_one_are_clean() {
    let result = validate("x = 0\ny = 1\n");
    assert_eq!(count_rule(&result, RuleId::MagicNumber), 0);
}

#[test]
fn test_r006_two_fires_exactly_once() {
    let result = validate("z = 2\n");
    assert_eq!(count_rule(&result, RuleId::MagicNumber), 1);
}

#[test]
fn test_r012_never_fires_below_three_functions() {
    // Names chosen to violate the ordering if it were checked
    let result = validate("def wrong():\n    pass\n\ndef names():\n    pass\n");
    assert_eq!(count_rule(&result, RuleId::FunctionOrder), 0);
}

#[test]
fn test_r012_fires_with_three_functions() {
    let result =
        validate("def wrong():\n    pass\n\ndef names():\n    pass\n\ndef here():\n    pass\n");
    assert_eq!(count_rule(&result, RuleId::FunctionOrder), 2);
}

#[test]
fn test_r010_eleven_members_fires() {
    let members: String = (0..11).map(|i| format!("    a{i} = 0\n")).collect();
    let result = validate(&format!("class Wide:\n{members}"));
    assert_eq!(count_rule(&result, RuleId::ClassSize), 1);
}

#[test]
fn test_r011_two_bases_fires() {
    let result = validate("class Child(A, B):\n    pass\n");
    assert_eq!(count_rule(&result, RuleId::MultipleInheritance), 1);
}

#[test]
fn test_r008_constant_return_fires() {
    let result = validate("def f():\n    return -1\n");
    // -1 is a unary expression, not a constant, matching Python's AST
    assert_eq!(count_rule(&result, RuleId::ErrorCodeReturn), 0);

    let result = validate("def f():\n    return 0\n");
    assert_eq!(count_rule(&result, RuleId::ErrorCodeReturn), 1);
}
