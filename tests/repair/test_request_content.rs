// Repair request assembly over real validation output.
use careen_enforce::ValidationEngine;
use careen_output::prompt::build_generation_prompt;
use careen_output::request::{build_fix_request, NO_FIXES_NEEDED};
use careen_output::templates::StaticTemplates;

#[test]
fn test_request_names_the_offending_function() {
    let source = "def setup():\n    pass\n\ndef compute():\n    total = 42\n    return total\n";
    let result = ValidationEngine::new().validate(source).unwrap();
    assert_eq!(result.violations.len(), 1);

    let request = build_fix_request(source, &result.violations, &StaticTemplates).unwrap();
    assert!(request.contains("**Function `compute` (Line 5)**"));
    assert!(request.contains("Rule R006"));
}

#[test]
fn test_request_sections_arrive_in_order() {
    let source = "x = 7\n";
    let result = ValidationEngine::new().validate(source).unwrap();
    let request = build_fix_request(source, &result.violations, &StaticTemplates).unwrap();

    let violations_at = request.find("Detected Clean Code Violations:").unwrap();
    let approach_at = request.find("Step-by-Step Fixing Approach").unwrap();
    let code_at = request.find("**Original Code:**").unwrap();
    assert!(violations_at < approach_at && approach_at < code_at);
    assert!(request.contains("**Global Issue (Line 1)**"));
}

#[test]
fn test_clean_code_yields_no_fixes_message() {
    let source = "def greet(name):\n    return name\n";
    let result = ValidationEngine::new().validate(source).unwrap();
    let request = build_fix_request(source, &result.violations, &StaticTemplates).unwrap();
    assert_eq!(request, NO_FIXES_NEEDED);
}

#[test]
fn test_whole_file_violations_render_as_global() {
    let source = "def alpha():\n    pass\n\ndef beta():\n    pass\n\ndef gamma():\n    pass\n";
    let result = ValidationEngine::new().validate(source).unwrap();
    let request = build_fix_request(source, &result.violations, &StaticTemplates).unwrap();
    assert!(request.contains("**Global Issue (Line unknown)** - **Rule R012**"));
}

#[test]
fn test_generation_prompt_lists_the_catalog() {
    let prompt = build_generation_prompt("sum a list", &StaticTemplates).unwrap();
    assert!(prompt.contains("**Clean Code Rules:**"));
    assert!(prompt.contains("R002"));
    assert!(prompt.contains("**User Query:** sum a list"));
}
