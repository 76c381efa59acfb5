//! Initial generation prompt assembly: system prompt, rendered rule
//! catalog, user query, final instructions.

use careen_core::types::RuleId;

use crate::templates::{ConfigLoadError, TemplateSource};

/// Render the hard-coded rule catalog, one line per rule.
pub fn render_rule_catalog() -> String {
    RuleId::ALL
        .iter()
        .map(|r| format!("{} {} - {}", r.code(), r.category(), r.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the prompt that asks the oracle to generate code for a task.
pub fn build_generation_prompt(
    user_query: &str,
    templates: &dyn TemplateSource,
) -> Result<String, ConfigLoadError> {
    let system = templates.system_prompt()?;
    let instructions = templates.final_instructions()?;
    let rules = render_rule_catalog();

    Ok(format!(
        "{system}\n\n---\n**Clean Code Rules:**\n{rules}\n\n---\n**User Query:** {user_query}\n\n---\n{instructions}"
    ))
}
