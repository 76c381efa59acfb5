use careen_enforce::ValidationEngine;
use careen_output::request::build_fix_request;

/// Run `careen request <file>` — print the repair request the oracle
/// would receive, without calling one.
pub fn run(verbose: bool, file: &str, templates_path: Option<&str>) -> i32 {
    let source = match super::read_source(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("careen request: failed to read {file}: {e}");
            return 2;
        }
    };

    let templates = match super::load_templates(templates_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("careen request: {e}");
            return 2;
        }
    };

    let engine = ValidationEngine::new();
    let result = match engine.validate(&source) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("careen request: {e}");
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "careen request: {} violation(s) to report",
            result.violations.len()
        );
    }

    match build_fix_request(&source, &result.violations, &*templates) {
        Ok(request) => {
            println!("{}", request);
            0
        }
        Err(e) => {
            eprintln!("careen request: {e}");
            2
        }
    }
}
