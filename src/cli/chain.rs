use std::process::ExitCode;

use crate::dispatch;
use crate::domain::HookName;
use crate::hook::{self, Hook, HookInvocation};

/// Execute the chain subcommand: run every sibling of `name` as one hook.
///
/// `raw_args` goes through the framework's own flag extraction, so the
/// subcommand honors the same `-v`/`--verbose`/`-d`/`--debug` contract as
/// any hook built on the library.
pub(crate) fn run(name: &str, raw_args: Vec<String>) -> ExitCode {
    let chain = ChainHook {
        target: HookName::new(name),
    };
    ExitCode::from(hook::drive(&chain, raw_args))
}

/// The chaining driver expressed as a concrete hook.
///
/// Named after its target so a `.git/hooks/pre-commit` script that execs
/// `hookchain chain pre-commit` reports as `pre-commit` in diagnostics.
/// Dispatch failures are fatal inside [`dispatch::invoke_hooks`]; this hook
/// itself records no policy violations.
struct ChainHook {
    target: HookName,
}

impl Hook for ChainHook {
    fn name(&self) -> &str {
        self.target.as_str()
    }

    fn run(&self, inv: &mut HookInvocation) {
        inv.debug_log(&format!("chaining sub-hooks of {}", self.target));
        dispatch::invoke_hooks(self.target.as_str(), &inv.args, inv.verbose, inv.debug);
    }
}
