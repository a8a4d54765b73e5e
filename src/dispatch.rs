use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::domain::HookName;
use crate::repo;

/// Error dispatching sibling hooks.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to read hook directory {}: {source}", .dir.display())]
    ReadDir { dir: PathBuf, source: io::Error },
    #[error("failed to launch sub-hook {}: {source}", .path.display())]
    Spawn { path: PathBuf, source: io::Error },
    #[error("sub-hook {} exited with {status}", .path.display())]
    SubHookFailed {
        path: PathBuf,
        status: ExitStatus,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
}

/// A candidate sibling hook: one file name inside the hook directory.
///
/// Entries are transient: enumerated fresh on every dispatch, never
/// persisted.
#[derive(Debug)]
struct HookDirEntry {
    name: String,
    path: PathBuf,
}

impl HookDirEntry {
    fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    fn is_sample(&self) -> bool {
        self.name.ends_with(".sample")
    }

    fn is_directory(&self) -> bool {
        self.path.is_dir()
    }

    /// Whether this entry should run alongside the hook named `name`.
    fn dispatches_for(&self, name: &HookName) -> bool {
        !self.is_hidden() && !self.is_directory() && !self.is_sample() && name.is_sibling(&self.name)
    }
}

/// Run every sibling hook of `name` found in `<git root>/.git/hooks/`.
///
/// Sibling hooks are invoked sequentially in lexicographic file-name order,
/// each with `--verbose`/`--debug` (when the corresponding flag is set)
/// followed by every element of `args` as its own argument. When all
/// siblings exit zero this returns normally with no observable output.
///
/// # Process exit
///
/// Fatal conditions terminate the process with status 1: running outside a
/// git working tree (fixed diagnostic from [`repo::require_git_root`]), an
/// unreadable hook directory, a sibling that cannot be launched, and the
/// fail-fast path, where the first sibling that exits non-zero has its
/// captured stdout and stderr replayed to stderr. Remaining siblings never
/// run.
pub fn invoke_hooks(name: &str, args: &[String], verbose: bool, debug: bool) {
    let root = repo::require_git_root();
    let hooks_dir = root.join(".git").join("hooks");
    let name = HookName::new(name);

    match run_siblings(&hooks_dir, &name, args, verbose, debug) {
        Ok(()) => {}
        Err(DispatchError::SubHookFailed { stdout, stderr, .. }) => {
            let mut sink = io::stderr();
            let _ = sink.write_all(&stdout);
            let _ = sink.write_all(&stderr);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run_siblings(
    hooks_dir: &Path,
    name: &HookName,
    args: &[String],
    verbose: bool,
    debug: bool,
) -> Result<(), DispatchError> {
    for entry in sibling_hooks(hooks_dir, name)? {
        run_sibling(&entry.path, args, verbose, debug)?;
    }
    Ok(())
}

/// Enumerate the hook directory and keep the entries that dispatch for
/// `name`, sorted lexicographically by file name.
///
/// Directory enumeration order is filesystem-dependent; sorting makes the
/// execution order (and therefore the fail-fast cutoff) deterministic.
fn sibling_hooks(hooks_dir: &Path, name: &HookName) -> Result<Vec<HookDirEntry>, DispatchError> {
    let read_dir = fs::read_dir(hooks_dir).map_err(|source| DispatchError::ReadDir {
        dir: hooks_dir.to_path_buf(),
        source,
    })?;

    let mut siblings = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| DispatchError::ReadDir {
            dir: hooks_dir.to_path_buf(),
            source,
        })?;
        // A name that is not valid UTF-8 cannot match a hook name prefix.
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        let candidate = HookDirEntry {
            path: entry.path(),
            name: file_name,
        };
        if candidate.dispatches_for(name) {
            siblings.push(candidate);
        }
    }

    siblings.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(siblings)
}

/// Run one sibling to completion, capturing its output.
fn run_sibling(
    path: &Path,
    args: &[String],
    verbose: bool,
    debug: bool,
) -> Result<(), DispatchError> {
    let mut cmd = Command::new(path);
    if verbose {
        cmd.arg("--verbose");
    }
    if debug {
        cmd.arg("--debug");
    }
    cmd.args(args);

    let output = cmd.output().map_err(|source| DispatchError::Spawn {
        path: path.to_path_buf(),
        source,
    })?;

    if !output.status.success() {
        return Err(DispatchError::SubHookFailed {
            path: path.to_path_buf(),
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Ok(())
}
