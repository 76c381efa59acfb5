//! Template text consumed when assembling oracle prompts.
//!
//! The core never reads configuration storage on its own: templates arrive
//! through [`TemplateSource`], and a source that cannot deliver fails with
//! [`ConfigLoadError`], which callers propagate rather than paper over.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("template file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },
    #[error("failed to parse {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("template '{0}' is missing")]
    Missing(&'static str),
}

/// Supplier of the static prompt text surrounding generated code.
pub trait TemplateSource {
    /// Persona and task framing for the initial generation prompt.
    fn system_prompt(&self) -> Result<String, ConfigLoadError>;

    /// Trailing instructions appended to every prompt.
    fn final_instructions(&self) -> Result<String, ConfigLoadError>;

    /// The step-by-step fixing approach embedded in repair requests.
    fn fixing_approach(&self) -> Result<String, ConfigLoadError>;
}

/// Compiled-in default templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTemplates;

const SYSTEM_PROMPT: &str = "\
You are a senior software engineer who writes clean, working Python code.
Solve the task below while following every clean code rule listed.";

const FINAL_INSTRUCTIONS: &str = "\
Return only runnable Python code.
Keep the observable behavior of the program unchanged.
Do not add commentary outside the code.";

const FIXING_APPROACH: &str = "\
### Step-by-Step Fixing Approach (Chain of Thought)
1. Understand the Code & Expected Behavior:
   - Ensure that after applying fixes, the functionality remains unchanged.
2. Analyze the Reported Issues:
   - Identify the specific lines where violations occur.
   - Understand why each issue is a violation.
3. Make Minimal Fixes to Correct Only the Reported Violations:
   - Do NOT introduce new Clean Code violations.
   - Ensure that the fixed code still produces the expected output.";

impl TemplateSource for StaticTemplates {
    fn system_prompt(&self) -> Result<String, ConfigLoadError> {
        Ok(SYSTEM_PROMPT.to_string())
    }

    fn final_instructions(&self) -> Result<String, ConfigLoadError> {
        Ok(FINAL_INSTRUCTIONS.to_string())
    }

    fn fixing_approach(&self) -> Result<String, ConfigLoadError> {
        Ok(FIXING_APPROACH.to_string())
    }
}

/// Templates read from a JSON file:
///
/// ```json
/// {
///   "system_prompt": "...",
///   "final_instructions": "...",
///   "fixing_approach": "..."
/// }
/// ```
///
/// Unlike `CareenConfig`, load failures here are hard errors: a repair
/// request without its fixing approach is not a degraded request, it is
/// the wrong request.
#[derive(Debug, Clone)]
pub struct FileTemplates {
    system_prompt: Option<String>,
    final_instructions: Option<String>,
    fixing_approach: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    system_prompt: Option<String>,
    final_instructions: Option<String>,
    fixing_approach: Option<String>,
}

impl FileTemplates {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let file: TemplateFile =
            serde_json::from_str(&content).map_err(|e| ConfigLoadError::Invalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            system_prompt: file.system_prompt,
            final_instructions: file.final_instructions,
            fixing_approach: file.fixing_approach,
        })
    }
}

impl TemplateSource for FileTemplates {
    fn system_prompt(&self) -> Result<String, ConfigLoadError> {
        self.system_prompt
            .clone()
            .ok_or(ConfigLoadError::Missing("system_prompt"))
    }

    fn final_instructions(&self) -> Result<String, ConfigLoadError> {
        self.final_instructions
            .clone()
            .ok_or(ConfigLoadError::Missing("final_instructions"))
    }

    fn fixing_approach(&self) -> Result<String, ConfigLoadError> {
        self.fixing_approach
            .clone()
            .ok_or(ConfigLoadError::Missing("fixing_approach"))
    }
}
