use careen_core::types::RuleId;
use careen_enforce::types::CheckResult;
use serde_json::json;

use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_rules(&self) -> String {
        let rules: Vec<_> = RuleId::ALL
            .iter()
            .map(|r| {
                json!({
                    "code": r.code(),
                    "category": r.category(),
                    "description": r.description(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&rules).unwrap_or_default()
    }
}
