use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a process's command line.
///
/// Materialized on demand by [`ProcessHandle::info`](crate::process::handle::ProcessHandle::info)
/// and never cached; the process may exit or re-exec immediately after
/// capture.
///
/// Whether `arguments` contains argv\[0\] depends on the platform data
/// source:
///
/// - Linux, macOS, Windows: `arguments` is the full argv, argv\[0\] included
/// - Solaris/illumos, FreeBSD: the first resolved string becomes
///   `executable` and `arguments` holds the rest
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessInfo {
    /// Best-effort executable path. `None` when the OS source does not
    /// expose it or the lookup failed; the rest of the snapshot is still
    /// valid in that case.
    pub executable: Option<String>,

    /// Ordered argument vector the process was started with.
    pub arguments: Vec<String>,
}

impl ProcessInfo {
    pub(crate) fn new(executable: Option<String>, arguments: Vec<String>) -> Self {
        ProcessInfo {
            executable,
            arguments,
        }
    }
}

impl fmt::Display for ProcessInfo {
    /// Renders the argument vector joined by spaces, falling back to the
    /// executable path when no arguments could be resolved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.arguments.is_empty() {
            return write!(f, "{}", self.arguments.join(" "));
        }
        match &self.executable {
            Some(exe) => write!(f, "{}", exe),
            None => write!(f, "?"),
        }
    }
}
