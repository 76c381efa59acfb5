use careen_output::OutputFormatter;

/// Run `careen rules` — list the rule catalog.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    print!("{}", formatter.format_rules());
    0
}
