// Accumulator state is rebuilt per validation run; nothing leaks across
// samples.
use careen_enforce::ValidationEngine;

#[test]
fn test_clean_snippet_validates_clean_twice() {
    let engine = ValidationEngine::new();
    let source = "def greet(name):\n    return name\n";

    let first = engine.validate(source).unwrap();
    let second = engine.validate(source).unwrap();

    assert!(first.violations.is_empty());
    assert!(second.violations.is_empty());
}

#[test]
fn test_flawed_sample_does_not_contaminate_the_next() {
    let engine = ValidationEngine::new();

    let flawed = engine.validate("x = 99\n").unwrap();
    assert_eq!(flawed.violations.len(), 1);

    let clean = engine.validate("x = 1\n").unwrap();
    assert!(clean.violations.is_empty());
}

#[test]
fn test_function_order_resets_between_runs() {
    let engine = ValidationEngine::new();

    // Two functions here, one there: never enough in a single run for the
    // ordering check, even though five were seen in total.
    let a = engine
        .validate("def wrong():\n    pass\n\ndef names():\n    pass\n")
        .unwrap();
    let b = engine
        .validate("def also():\n    pass\n\ndef short():\n    pass\n")
        .unwrap();
    let c = engine.validate("def last():\n    pass\n").unwrap();

    assert!(a.violations.is_empty());
    assert!(b.violations.is_empty());
    assert!(c.violations.is_empty());
}
