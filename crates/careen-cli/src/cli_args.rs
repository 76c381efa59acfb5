use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "careen",
    version,
    about = "Clean-code validation and bounded LLM repair"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as token-optimized LLM format
    #[arg(long, global = true)]
    pub llm: bool,

    /// Include extra diagnostics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Validate a source file against the rule catalog
    Check {
        /// Source file to validate, or '-' for stdin
        file: String,
    },

    /// Print the repair request that would be sent to the oracle
    Request {
        /// Source file to validate, or '-' for stdin
        file: String,
        /// JSON template file (defaults to compiled-in templates)
        #[arg(long)]
        templates: Option<String>,
    },

    /// Run the bounded repair loop with an oracle command
    Repair {
        /// Source file to repair, or '-' for stdin
        file: String,
        /// Oracle command; receives the prompt on stdin, replies on stdout
        #[arg(long)]
        oracle: String,
        /// Override the configured repair bound
        #[arg(long)]
        max_iterations: Option<u32>,
        /// Treat the input as the oracle's first output (extract the
        /// solution payload before validating)
        #[arg(long)]
        first_output: bool,
        /// JSON template file (defaults to compiled-in templates)
        #[arg(long)]
        templates: Option<String>,
    },

    /// Generate code for a task with an oracle command, then repair it
    Generate {
        /// Task description passed to the oracle
        query: String,
        /// Oracle command; receives the prompt on stdin, replies on stdout
        #[arg(long)]
        oracle: String,
        /// Override the configured repair bound
        #[arg(long)]
        max_iterations: Option<u32>,
        /// JSON template file (defaults to compiled-in templates)
        #[arg(long)]
        templates: Option<String>,
    },

    /// List the rule catalog
    Rules,
}
