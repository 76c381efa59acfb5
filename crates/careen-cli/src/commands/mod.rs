pub mod check;
pub mod generate;
pub mod repair;
pub mod request;
pub mod rules;

use std::io::Read;
use std::path::Path;

use careen_output::templates::{ConfigLoadError, FileTemplates, StaticTemplates};
use careen_output::TemplateSource;

/// Read the source argument: a file path, or stdin for `-`.
pub(crate) fn read_source(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

/// Resolve the template source: a JSON file when given, compiled-in
/// defaults otherwise.
pub(crate) fn load_templates(
    path: Option<&str>,
) -> Result<Box<dyn TemplateSource>, ConfigLoadError> {
    match path {
        Some(p) => Ok(Box::new(FileTemplates::load(Path::new(p))?)),
        None => Ok(Box::new(StaticTemplates)),
    }
}
