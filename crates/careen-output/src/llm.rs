use careen_core::types::RuleId;
use careen_enforce::types::CheckResult;

use crate::OutputFormatter;

/// Compact single-line-per-fact output for AI coding agents.
pub struct LlmFormatter;

impl OutputFormatter for LlmFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.violations.is_empty() {
            return format!("CHECK ok functions={}\n", result.functions_analyzed);
        }

        let mut out = format!(
            "CHECK {} violations functions={}\n",
            result.violations.len(),
            result.functions_analyzed,
        );
        for v in &result.violations {
            out.push_str(&format!(
                "VIOLATION {} line={} {} {}\n",
                v.rule,
                v.line,
                v.rule.category(),
                v.message,
            ));
        }
        out
    }

    fn format_rules(&self) -> String {
        let mut out = String::from("RULES 9\n");
        for rule in RuleId::ALL {
            out.push_str(&format!(
                "{} {} {}\n",
                rule.code(),
                rule.category(),
                rule.description(),
            ));
        }
        out
    }
}
