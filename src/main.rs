use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Shared driver for git hook programs: chaining, flags, exit codes.
#[derive(Debug, Parser)]
#[command(name = "hookchain", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run every sibling hook of NAME found in .git/hooks/
    Chain {
        /// Hook name whose siblings to run (e.g. pre-commit)
        name: String,
        /// Arguments forwarded to each sibling; -v/-d/--verbose/--debug are
        /// extracted for the driver itself
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Classify a file as binary or text (exit 0 = binary, 1 = text)
    IsBinary {
        /// File to inspect
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chain { name, args } => hookchain::run_chain(&name, args),
        Commands::IsBinary { path } => hookchain::run_is_binary(&path),
    }
}
