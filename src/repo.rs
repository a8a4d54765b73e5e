use std::path::{Path, PathBuf};
use std::process::Command;

/// Error resolving the enclosing git working tree.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("failed to invoke git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("not inside a git working tree")]
    NotARepository,
}

/// Resolve the absolute top-level path of the enclosing git working tree.
///
/// Runs `git rev-parse --show-toplevel`, captures stdout, and trims
/// surrounding whitespace. Resolved fresh on every call, never cached
/// across processes. A non-zero git exit means the current directory is not
/// inside a working tree.
pub fn git_root() -> Result<PathBuf, RepoError> {
    git_root_from(Path::new("."))
}

fn git_root_from(dir: &Path) -> Result<PathBuf, RepoError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()?;

    if !output.status.success() {
        return Err(RepoError::NotARepository);
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(PathBuf::from(root))
}

/// Resolve the working tree root or terminate the process.
///
/// Running outside a repository is a fatal precondition for every hook:
/// writes `Did not run as part of a git repository.` to stderr and exits
/// with status 1.
pub fn require_git_root() -> PathBuf {
    match git_root() {
        Ok(root) => root,
        Err(_) => {
            eprintln!("Did not run as part of a git repository.");
            std::process::exit(1);
        }
    }
}
