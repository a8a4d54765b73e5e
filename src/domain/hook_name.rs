/// A normalized hook name (basename only, no path prefix).
///
/// Constructed from a raw string; extracts the basename component so
/// `.git/hooks/pre-commit` and `pre-commit` both produce
/// `HookName("pre-commit")`. Sibling matching is prefix-based, so the name
/// must never contain a path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HookName(String);

impl HookName {
    /// Create from a raw name string, stripping any path prefix.
    ///
    /// `.git/hooks/pre-commit` → `pre-commit`, `pre-push` → `pre-push`.
    pub(crate) fn new(raw: &str) -> Self {
        let basename = raw.rsplit('/').next().unwrap_or(raw);
        HookName(basename.to_string())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `entry` names a sibling of this hook: shares the name as a
    /// prefix but is not the hook itself. Self-exclusion is what prevents a
    /// chaining hook from recursing into itself.
    pub(crate) fn is_sibling(&self, entry: &str) -> bool {
        entry.starts_with(&self.0) && entry != self.0
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
