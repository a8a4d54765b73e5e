use std::process::ExitCode;

use crate::args;

/// A policy hook: one required `run` operation plus a display name.
///
/// `run` performs the actual checks, calling [`HookInvocation::error`] once
/// per violation found. Its return value is not consulted; only the
/// invocation's accumulated error count decides the exit code. Faults inside
/// `run` are not caught by the driver; a panic is fatal to the process.
pub trait Hook {
    /// Name used in the verbose start line and the `[POLICY]:` prefix.
    fn name(&self) -> &str;

    /// Perform the policy checks for one invocation.
    fn run(&self, inv: &mut HookInvocation);
}

/// Mutable state of one hook execution.
///
/// Constructed by the driver, threaded by reference into [`Hook::run`].
/// `errors` only ever increases, and only through [`HookInvocation::error`];
/// it is read once at the end of the lifecycle to derive the exit code.
#[derive(Debug)]
pub struct HookInvocation {
    name: String,
    errors: u32,
    pub verbose: bool,
    pub debug: bool,
    /// Arguments remaining after flag extraction, in original order.
    pub args: Vec<String>,
}

impl HookInvocation {
    pub fn new(name: &str) -> Self {
        HookInvocation {
            name: name.to_string(),
            errors: 0,
            verbose: false,
            debug: false,
            args: Vec::new(),
        }
    }

    /// Record a policy violation.
    ///
    /// Writes `[POLICY]: <name> - <msg>` to stderr unconditionally and
    /// increments the error count.
    pub fn error(&mut self, msg: &str) {
        eprintln!("{}", policy_line(&self.name, msg));
        self.errors += 1;
    }

    /// Number of violations recorded so far.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Write `msg` to stderr when the debug flag is set.
    pub fn debug_log(&self, msg: &str) {
        if self.debug {
            eprintln!("{msg}");
        }
    }

    /// Write `msg` to stderr when the verbose flag is set.
    pub fn verbose_log(&self, msg: &str) {
        if self.verbose {
            eprintln!("{msg}");
        }
    }
}

/// Stable stderr format for policy violations.
fn policy_line(name: &str, msg: &str) -> String {
    format!("[POLICY]: {name} - {msg}")
}

/// Drive one hook execution and return the process exit status.
///
/// Builds the invocation, extracts driver flags from `raw_args`, announces
/// the hook on the verbose channel, runs it, and maps the accumulated error
/// count to an exit status: 1 if any violation was recorded, 0 otherwise.
pub fn drive(hook: &dyn Hook, raw_args: Vec<String>) -> u8 {
    let parsed = args::parse(raw_args);

    let mut inv = HookInvocation::new(hook.name());
    inv.verbose = parsed.verbose;
    inv.debug = parsed.debug;
    inv.args = parsed.rest;

    inv.verbose_log(&format!("Running hook: {}", hook.name()));
    hook.run(&mut inv);

    if inv.errors > 0 {
        1
    } else {
        0
    }
}

/// Entry point for hook binaries: feed process arguments through [`drive`].
///
/// ```no_run
/// use hookchain::hook::{self, Hook, HookInvocation};
/// use std::process::ExitCode;
///
/// struct DenyEverything;
///
/// impl Hook for DenyEverything {
///     fn name(&self) -> &str {
///         "deny-everything"
///     }
///
///     fn run(&self, inv: &mut HookInvocation) {
///         inv.error("nothing gets committed today");
///     }
/// }
///
/// fn main() -> ExitCode {
///     hook::hook_main(&DenyEverything)
/// }
/// ```
pub fn hook_main(hook: &dyn Hook) -> ExitCode {
    ExitCode::from(drive(hook, std::env::args().skip(1).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records a fixed number of violations and what flags it observed.
    struct CountingHook {
        violations: u32,
        saw_verbose: Cell<bool>,
        saw_debug: Cell<bool>,
        saw_args: Cell<Vec<String>>,
    }

    impl CountingHook {
        fn new(violations: u32) -> Self {
            CountingHook {
                violations,
                saw_verbose: Cell::new(false),
                saw_debug: Cell::new(false),
                saw_args: Cell::new(Vec::new()),
            }
        }
    }

    impl Hook for CountingHook {
        fn name(&self) -> &str {
            "counting-hook"
        }

        fn run(&self, inv: &mut HookInvocation) {
            self.saw_verbose.set(inv.verbose);
            self.saw_debug.set(inv.debug);
            self.saw_args.set(inv.args.clone());
            for i in 0..self.violations {
                inv.error(&format!("violation {i}"));
            }
        }
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_errors_exits_zero() {
        assert_eq!(drive(&CountingHook::new(0), vec![]), 0);
    }

    #[test]
    fn one_error_exits_one() {
        assert_eq!(drive(&CountingHook::new(1), vec![]), 1);
    }

    #[test]
    fn many_errors_still_exit_one() {
        assert_eq!(drive(&CountingHook::new(7), vec![]), 1);
    }

    #[test]
    fn error_count_matches_calls() {
        let mut inv = HookInvocation::new("counting-hook");
        assert_eq!(inv.errors(), 0);
        inv.error("first");
        inv.error("second");
        inv.error("third");
        assert_eq!(inv.errors(), 3);
    }

    #[test]
    fn driver_threads_flags_into_invocation() {
        let hook = CountingHook::new(0);
        drive(&hook, strings(&["-v", "--debug"]));
        assert!(hook.saw_verbose.get());
        assert!(hook.saw_debug.get());
    }

    #[test]
    fn driver_threads_positionals_into_invocation() {
        let hook = CountingHook::new(0);
        drive(&hook, strings(&["-v", "a", "-x", "b"]));
        assert_eq!(hook.saw_args.take(), strings(&["a", "-x", "b"]));
    }

    #[test]
    fn fresh_invocation_is_clean() {
        let inv = HookInvocation::new("counting-hook");
        assert_eq!(inv.errors(), 0);
        assert!(!inv.verbose);
        assert!(!inv.debug);
        assert!(inv.args.is_empty());
    }

    #[test]
    fn policy_line_format() {
        assert_eq!(
            policy_line("pre-commit", "tabs are forbidden"),
            "[POLICY]: pre-commit - tabs are forbidden"
        );
    }
}
