use serde::Serialize;

use careen_core::config::RepairSettings;
use careen_enforce::types::Violation;
use careen_enforce::ValidationEngine;
use careen_output::request::build_fix_request;
use careen_output::templates::{ConfigLoadError, TemplateSource};
use careen_parsers::ParseError;

use crate::oracle::Oracle;
use crate::sanitize::{extract_solution, sanitize_reply};

/// Why a repair session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current code has zero violations.
    Converged,
    /// Violations remain but the iteration bound is spent.
    Exhausted,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Converged => f.write_str("converged"),
            Termination::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Final state of one repair session.
#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    pub original: String,
    pub code: String,
    pub iterations: u32,
    pub termination: Termination,
    /// Violations still present in `code` when the session stopped. Empty
    /// exactly when `termination` is `Converged`.
    pub violations: Vec<Violation>,
}

#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Template(#[from] ConfigLoadError),
}

/// Phases of the repair loop. Each full pass through
/// `BuildingRequest -> Generating -> Sanitizing` increments the iteration
/// counter exactly once, whether or not the regenerated code improved.
enum Phase {
    Validating,
    BuildingRequest(Vec<Violation>),
    Generating(String),
    Sanitizing(String),
    Done(Termination, Vec<Violation>),
}

/// Drives the bounded validate, fix, revalidate loop for one code sample
/// at a time. Fixes always come from the oracle; the controller only
/// decides when to stop asking.
pub struct RepairController<'a> {
    oracle: &'a mut dyn Oracle,
    templates: &'a dyn TemplateSource,
    max_iterations: u32,
}

impl<'a> RepairController<'a> {
    /// Controller with the default bound of one repair attempt.
    pub fn new(oracle: &'a mut dyn Oracle, templates: &'a dyn TemplateSource) -> Self {
        Self::with_settings(oracle, templates, &RepairSettings::default())
    }

    pub fn with_settings(
        oracle: &'a mut dyn Oracle,
        templates: &'a dyn TemplateSource,
        settings: &RepairSettings,
    ) -> Self {
        Self {
            oracle,
            templates,
            max_iterations: settings.max_iterations,
        }
    }

    /// Repair a code sample that is already plain source text.
    pub fn repair(&mut self, code: &str) -> Result<RepairReport, RepairError> {
        self.run(code.to_string())
    }

    /// Repair the first oracle output of a session: separate an embedded
    /// code payload from surrounding prose, sanitize, then loop as usual.
    pub fn repair_generated(&mut self, raw_output: &str) -> Result<RepairReport, RepairError> {
        let code = sanitize_reply(&extract_solution(raw_output));
        self.run(code)
    }

    fn run(&mut self, original: String) -> Result<RepairReport, RepairError> {
        let engine = ValidationEngine::new();
        let mut current = original.clone();
        let mut iteration = 0u32;
        let mut phase = Phase::Validating;

        loop {
            phase = match phase {
                Phase::Validating => {
                    let result = engine.validate(&current)?;
                    if result.is_clean() {
                        Phase::Done(Termination::Converged, result.violations)
                    } else if iteration >= self.max_iterations {
                        Phase::Done(Termination::Exhausted, result.violations)
                    } else {
                        Phase::BuildingRequest(result.violations)
                    }
                }
                Phase::BuildingRequest(violations) => {
                    let request = build_fix_request(&current, &violations, self.templates)?;
                    Phase::Generating(request)
                }
                Phase::Generating(request) => {
                    let reply = self.oracle.generate(&request);
                    Phase::Sanitizing(reply)
                }
                Phase::Sanitizing(reply) => {
                    current = sanitize_reply(&reply);
                    iteration += 1;
                    Phase::Validating
                }
                Phase::Done(termination, violations) => {
                    return Ok(RepairReport {
                        original,
                        code: current,
                        iterations: iteration,
                        termination,
                        violations,
                    });
                }
            };
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
