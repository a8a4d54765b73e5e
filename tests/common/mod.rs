// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_hookchain"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the hookchain binary with the given args inside `cwd`.
/// Returns (stdout, stderr, exit_code).
pub fn run_hookchain(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Creates a temp git repository with a real `git init`, so `.git/hooks`
/// exists and carries git's stock `.sample` files.
pub fn init_repo() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let status = Command::new("git")
        .args(["init", "-q"])
        .current_dir(dir.path())
        .status()
        .expect("git must be available for tests");
    assert!(status.success(), "git init failed");
    dir
}

pub fn hooks_dir(repo: &TempDir) -> PathBuf {
    repo.path().join(".git").join("hooks")
}

/// Writes an executable hook script into the repo's hook directory.
pub fn install_hook(repo: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = hooks_dir(repo).join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write hook");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("failed to chmod hook");
    path
}

/// Installs a hook that appends its own name to `log` when run.
pub fn install_logging_hook(repo: &TempDir, name: &str, log: &Path) -> PathBuf {
    install_hook(repo, name, &format!("echo {} >> {}", name, log.display()))
}
