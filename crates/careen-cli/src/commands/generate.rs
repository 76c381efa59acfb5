use careen_core::config::CareenConfig;
use careen_repair::{CleanCodePipeline, Termination};

use crate::oracle_cmd::CommandOracle;

/// Run `careen generate <query> --oracle <cmd>` — generate code for a
/// task, then validate and repair the answer.
pub fn run(
    json: bool,
    verbose: bool,
    query: &str,
    oracle_cmd: &str,
    max_iterations: Option<u32>,
    templates_path: Option<&str>,
) -> i32 {
    let templates = match super::load_templates(templates_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("careen generate: {e}");
            return 2;
        }
    };

    let Some(mut oracle) = CommandOracle::parse(oracle_cmd) else {
        eprintln!("careen generate: empty oracle command");
        return 2;
    };

    let careen_dir = std::env::current_dir()
        .map(|p| p.join(".careen"))
        .unwrap_or_default();
    let mut settings = CareenConfig::load(&careen_dir).repair;
    if let Some(bound) = max_iterations {
        settings.max_iterations = bound;
    }

    let mut pipeline = CleanCodePipeline::with_settings(&mut oracle, &*templates, settings);
    match pipeline.run(query) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("careen generate: failed to serialize report: {e}");
                        return 2;
                    }
                }
            } else {
                if verbose {
                    eprintln!(
                        "careen generate: {} after {} iteration(s), {} violation(s) remaining",
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
            eprintln!("careen generate: {e}");
            2
        }
    }
}
