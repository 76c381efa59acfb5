//! Full generate-then-repair pipeline: prompt the oracle for fresh code,
//! peel the solution payload out of its first answer, then hand the code
//! to the bounded repair loop.

use careen_core::config::RepairSettings;
use careen_output::prompt::build_generation_prompt;
use careen_output::templates::TemplateSource;

use crate::controller::{RepairController, RepairError, RepairReport};
use crate::oracle::Oracle;

pub struct CleanCodePipeline<'a> {
    oracle: &'a mut dyn Oracle,
    templates: &'a dyn TemplateSource,
    settings: RepairSettings,
}

impl<'a> CleanCodePipeline<'a> {
    pub fn new(oracle: &'a mut dyn Oracle, templates: &'a dyn TemplateSource) -> Self {
        Self::with_settings(oracle, templates, RepairSettings::default())
    }

    pub fn with_settings(
        oracle: &'a mut dyn Oracle,
        templates: &'a dyn TemplateSource,
        settings: RepairSettings,
    ) -> Self {
        Self {
            oracle,
            templates,
            settings,
        }
    }

    /// Ask the oracle to solve `user_query`, then validate and repair its
    /// answer. The generation call does not count toward the repair bound.
    pub fn run(&mut self, user_query: &str) -> Result<RepairReport, RepairError> {
        let prompt = build_generation_prompt(user_query, self.templates)?;
        let output = self.oracle.generate(&prompt);

        let mut controller =
            RepairController::with_settings(&mut *self.oracle, self.templates, &self.settings);
        controller.repair_generated(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Termination;
    use crate::oracle::ScriptedOracle;
    use careen_output::templates::StaticTemplates;

    #[test]
    fn test_generation_feeds_the_repair_loop() {
        let generation = "**Solution:**\n```python\ndef DoWork(a, b, c, d):\n    return a\n```\n";
        let fixed = "def do_work(a, b, c):\n    return a\n";
        let mut oracle = ScriptedOracle::new(vec![generation.into(), fixed.into()]);

        let mut pipeline = CleanCodePipeline::new(&mut oracle, &StaticTemplates);
        let report = pipeline.run("do some work").unwrap();

        assert_eq!(oracle.calls, 2); // one generation, one repair
        assert_eq!(report.iterations, 1);
        assert_eq!(report.termination, Termination::Converged);
        assert_eq!(report.code, fixed);
    }

    #[test]
    fn test_clean_first_answer_needs_no_repair_call() {
        let generation = "Solution:\ndef greet(name):\n    return name\n";
        let mut oracle = ScriptedOracle::new(vec![generation.into()]);

        let mut pipeline = CleanCodePipeline::new(&mut oracle, &StaticTemplates);
        let report = pipeline.run("greet someone").unwrap();

        assert_eq!(oracle.calls, 1);
        assert_eq!(report.iterations, 0);
        assert_eq!(report.termination, Termination::Converged);
    }
}
