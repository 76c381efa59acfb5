use careen_core::config::CareenConfig;
use careen_repair::{RepairController, Termination};

use crate::oracle_cmd::CommandOracle;

/// Run `careen repair <file> --oracle <cmd>` — drive the bounded repair
/// loop and print the final code.
pub fn run(
    json: bool,
    verbose: bool,
    file: &str,
    oracle_cmd: &str,
    max_iterations: Option<u32>,
    first_output: bool,
    templates_path: Option<&str>,
) -> i32 {
    let source = match super::read_source(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("careen repair: failed to read {file}: {e}");
            return 2;
        }
    };

    let templates = match super::load_templates(templates_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("careen repair: {e}");
            return 2;
        }
    };

    let Some(mut oracle) = CommandOracle::parse(oracle_cmd) else {
        eprintln!("careen repair: empty oracle command");
        return 2;
    };

    let careen_dir = std::env::current_dir()
        .map(|p| p.join(".careen"))
        .unwrap_or_default();
    let mut settings = CareenConfig::load(&careen_dir).repair;
    if let Some(bound) = max_iterations {
        settings.max_iterations = bound;
    }

    let mut controller = RepairController::with_settings(&mut oracle, &*templates, &settings);
    let outcome = if first_output {
        controller.repair_generated(&source)
    } else {
        controller.repair(&source)
    };

    match outcome {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("careen repair: failed to serialize report: {e}");
                        return 2;
                    }
                }
            } else {
                if verbose {
                    eprintln!(
                        "careen repair: {} after {} iteration(s), {} violation(s) remaining",
                        report.termination,
                        report.iterations,
                        report.violations.len(),
                    );
                }
                print!("{}", report.code);
            }
            if report.termination == Termination::Converged {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("careen repair: {e}");
            2
        }
    }
}
