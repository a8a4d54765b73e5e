pub mod args;
pub mod content;
pub mod dispatch;
pub mod hook;
pub mod repo;

pub(crate) mod cli;
pub(crate) mod domain;

use std::path::Path;
use std::process::ExitCode;

/// Run the chain subcommand: dispatch every sibling hook of `name`.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Hook authors
/// should implement [`hook::Hook`] and call [`hook::hook_main`] directly.
pub fn run_chain(name: &str, args: Vec<String>) -> ExitCode {
    cli::chain::run(name, args)
}

/// Run the is-binary subcommand: classify `path` and map the result to an
/// exit code (0 = binary, 1 = text, 2 = file-access error).
pub fn run_is_binary(path: &Path) -> ExitCode {
    cli::is_binary::run(path)
}
