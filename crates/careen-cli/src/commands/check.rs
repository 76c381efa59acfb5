use careen_enforce::ValidationEngine;
use careen_output::OutputFormatter;

/// Run `careen check <file>` — validate one source sample.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, file: &str) -> i32 {
    let source = match super::read_source(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("careen check: failed to read {file}: {e}");
            return 2;
        }
    };

    let engine = ValidationEngine::new();
    match engine.validate(&source) {
        Ok(result) => {
            if verbose {
                eprintln!(
                    "careen check: {} function(s) analyzed",
                    result.functions_analyzed
                );
            }
            let output = formatter.format_check(&result);
            if !output.is_empty() {
                println!("{}", output);
            }
            if result.is_clean() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("careen check: {e}");
            2
        }
    }
}
