//! careen CLI — clean-code validation and bounded LLM repair.
//!
//! This binary provides the `careen` command with subcommands for checking
//! generated source, previewing repair requests, driving the repair loop
//! against an oracle command, and listing the rule catalog. See
//! `careen --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod oracle_cmd;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn careen_output::OutputFormatter> = if cli.json {
        Box::new(careen_output::json::JsonFormatter)
    } else if cli.llm {
        Box::new(careen_output::llm::LlmFormatter)
    } else {
        Box::new(careen_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { file } => commands::check::run(&*formatter, cli.verbose, &file),
        Commands::Request { file, templates } => {
            commands::request::run(cli.verbose, &file, templates.as_deref())
        }
        Commands::Repair {
            file,
            oracle,
            max_iterations,
            first_output,
            templates,
        } => commands::repair::run(
            cli.json,
            cli.verbose,
            &file,
            &oracle,
            max_iterations,
            first_output,
            templates.as_deref(),
        ),
        Commands::Generate {
            query,
            oracle,
            max_iterations,
            templates,
        } => commands::generate::run(
            cli.json,
            cli.verbose,
            &query,
            &oracle,
            max_iterations,
            templates.as_deref(),
        ),
        Commands::Rules => commands::rules::run(&*formatter),
    };

    std::process::exit(exit_code);
}
