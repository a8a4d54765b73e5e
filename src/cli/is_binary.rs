use std::path::Path;
use std::process::ExitCode;

use crate::content;

/// Execute the is-binary subcommand.
///
/// Exit codes follow shell-predicate convention: 0 when the file is binary,
/// 1 when it is text, 2 with a diagnostic when the file cannot be read.
/// This lets non-Rust sibling hooks use the same classifier the library
/// offers Rust hooks.
pub(crate) fn run(path: &Path) -> ExitCode {
    match content::is_binary(path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("hookchain: {}: {e}", path.display());
            ExitCode::from(2)
        }
    }
}
