use serde::{Deserialize, Serialize};

use careen_core::types::{LineRef, RuleId};

/// A single clean-code violation. Produced only by the rule engine and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleId,
    pub line: LineRef,
    pub message: String,
}

/// Outcome of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: String, // "ok" | "violations"
    pub functions_analyzed: u32,
    pub violations: Vec<Violation>,
}

impl CheckResult {
    pub fn new(functions_analyzed: u32, violations: Vec<Violation>) -> Self {
        let status = if violations.is_empty() {
            "ok"
        } else {
            "violations"
        };
        Self {
            status: status.to_string(),
            functions_analyzed,
            violations,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
