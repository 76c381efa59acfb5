//! Repair request assembly: violation explanations, the fixing-approach
//! template, and the original code, in that order.

use careen_core::types::LineRef;
use careen_enforce::types::Violation;

use crate::templates::{ConfigLoadError, TemplateSource};

/// Reply used instead of a repair request when there is nothing to fix.
pub const NO_FIXES_NEEDED: &str = "No violations detected. No fixes needed.";

/// Render one explanation line per violation, preserving engine order.
///
/// Each violation with a known line is attributed to its enclosing function
/// by scanning the code text backward for the nearest `def ` line. This is
/// a textual heuristic, not a structural lookup; a violation with no `def `
/// above it is reported as a global issue.
pub fn format_violations(code: &str, violations: &[Violation]) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let mut details = Vec::with_capacity(violations.len());

    for v in violations {
        let function = match v.line {
            LineRef::Line(n) if n >= 1 && (n as usize) <= lines.len() => {
                find_enclosing_function(&lines, n)
            }
            _ => None,
        };
        let detail = match function {
            Some(name) => format!(
                "**Function `{name}` (Line {})** - **Rule {}**: {}",
                v.line, v.rule, v.message
            ),
            None => format!(
                "**Global Issue (Line {})** - **Rule {}**: {}",
                v.line, v.rule, v.message
            ),
        };
        details.push(detail);
    }

    details.join("\n")
}

/// Assemble the full repair request for the oracle, or the short
/// no-fixes reply when the violation list is empty.
pub fn build_fix_request(
    code: &str,
    violations: &[Violation],
    templates: &dyn TemplateSource,
) -> Result<String, ConfigLoadError> {
    if violations.is_empty() {
        return Ok(NO_FIXES_NEEDED.to_string());
    }

    let approach = templates.fixing_approach()?;
    let formatted = format_violations(code, violations);

    let mut out = String::new();
    out.push_str("Detected Clean Code Violations:\n");
    out.push_str(&formatted);
    out.push_str("\n\n---\n");
    out.push_str(&approach);
    out.push_str("\n\n---\n**Original Code:**\n");
    out.push_str(code);
    Ok(out.trim().to_string())
}

fn find_enclosing_function(lines: &[&str], line: u32) -> Option<String> {
    let start = line as usize - 1;
    for i in (0..=start).rev() {
        let trimmed = lines[i].trim();
        if let Some(rest) = trimmed.strip_prefix("def ") {
            let name = rest.split('(').next().unwrap_or("").trim();
            return Some(name.to_string());
        }
    }
    None
}
