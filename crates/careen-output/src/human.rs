use careen_core::types::RuleId;
use careen_enforce::types::CheckResult;

use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.violations.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format!(
                "{} [{}] line {}: {}\n",
                v.rule,
                v.rule.category(),
                v.line,
                v.message,
            ));
        }
        out.push_str(&format!(
            "\n{} violation(s) in {} function(s)\n",
            result.violations.len(),
            result.functions_analyzed,
        ));
        out
    }

    fn format_rules(&self) -> String {
        let mut out = String::from("Clean code rule catalog:\n");
        for rule in RuleId::ALL {
            out.push_str(&format!(
                "  {}  {:<16} {}\n",
                rule.code(),
                rule.category(),
                rule.description(),
            ));
        }
        out
    }
}
