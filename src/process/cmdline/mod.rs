//! Per-platform command-line resolution.
//!
//! Each platform module exposes a `resolve(pid)` built on that OS's
//! information source: `/proc/<pid>/cmdline` on Linux, `psinfo` plus the
//! process address space on Solaris/illumos, `sysctl(KERN_PROCARGS2)` on
//! macOS, `sysctl(KERN_PROC_ARGS)` on FreeBSD, and the PEB command line plus
//! `CommandLineToArgvW` on Windows. The byte-buffer parsers are kept separate
//! from the syscalls so they stay testable on every host.

#[cfg(target_os = "freebsd")]
pub(crate) mod freebsd;
#[cfg(target_os = "linux")]
pub(crate) mod linux;
#[cfg(any(target_os = "macos", test))]
pub(crate) mod macos;
#[cfg(any(target_os = "solaris", target_os = "illumos", test))]
pub(crate) mod solaris;
#[cfg(windows)]
pub(crate) mod windows;

use crate::process::action::validate_pid;
use crate::process::error::ProcessResult;
use crate::process::info::ProcessInfo;

/// Whether `ProcessInfo::arguments` carries argv\[0\] on this platform.
/// Linux, macOS and Windows report the full argv; Solaris and FreeBSD split
/// the first string off into the executable field.
#[cfg(any(target_os = "linux", target_os = "macos", windows))]
pub(crate) const ARGV0_IN_ARGUMENTS: bool = true;
#[cfg(any(target_os = "solaris", target_os = "illumos", target_os = "freebsd"))]
pub(crate) const ARGV0_IN_ARGUMENTS: bool = false;
#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "solaris",
    target_os = "illumos",
    target_os = "freebsd",
    windows
)))]
pub(crate) const ARGV0_IN_ARGUMENTS: bool = true;

/// Resolve the executable path and argument vector of a live process.
///
/// Best-effort snapshot: the executable field degrades to `None` when the OS
/// does not expose it, while a process that cannot be found or read at all is
/// an error. No retries; a process that exits mid-call surfaces as
/// [`NotFound`](crate::process::error::ProcessError::NotFound) or a short
/// read depending on where the race lands.
///
/// # Errors
///
/// Returns an error if:
/// - The PID is zero or out of range ([`InvalidPid`](crate::process::error::ProcessError::InvalidPid))
/// - The process does not exist ([`NotFound`](crate::process::error::ProcessError::NotFound))
/// - The process information source is unreadable ([`PermissionDenied`](crate::process::error::ProcessError::PermissionDenied))
/// - The OS data was truncated or garbled ([`Malformed`](crate::process::error::ProcessError::Malformed))
/// - No resolver exists for this platform ([`UnsupportedPlatform`](crate::process::error::ProcessError::UnsupportedPlatform))
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn resolve(pid: u32) -> ProcessResult<ProcessInfo> {
    validate_pid(pid)?;

    #[cfg(target_os = "linux")]
    {
        linux::resolve(pid)
    }

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    {
        solaris::resolve(pid)
    }

    #[cfg(target_os = "macos")]
    {
        macos::resolve(pid)
    }

    #[cfg(target_os = "freebsd")]
    {
        freebsd::resolve(pid)
    }

    #[cfg(windows)]
    {
        windows::resolve(pid)
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "solaris",
        target_os = "illumos",
        target_os = "macos",
        target_os = "freebsd",
        windows
    )))]
    {
        use crate::process::error::ProcessError;

        Err(ProcessError::UnsupportedPlatform("command-line resolution"))
    }
}

/// Splits a NUL-separated argument blob (Linux `cmdline`, FreeBSD
/// `KERN_PROC_ARGS`) into strings, dropping empty trailing slots.
#[cfg(any(target_os = "linux", target_os = "freebsd", test))]
pub(crate) fn split_nul_blob(blob: &[u8]) -> Vec<String> {
    blob.split(|b| *b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_nul_blob;

    #[test]
    fn split_nul_blob_basic() {
        let blob = b"sleep\x005\x00";
        assert_eq!(split_nul_blob(blob), vec!["sleep", "5"]);
    }

    #[test]
    fn split_nul_blob_without_trailing_nul() {
        let blob = b"a\x00bc";
        assert_eq!(split_nul_blob(blob), vec!["a", "bc"]);
    }

    #[test]
    fn split_nul_blob_empty() {
        assert!(split_nul_blob(b"").is_empty());
        // zombies and kernel threads expose an empty cmdline
        assert!(split_nul_blob(b"\x00").is_empty());
    }

    #[test]
    fn split_nul_blob_lossy_on_invalid_utf8() {
        let blob = b"ok\x00\xff\xfe\x00";
        let parts = split_nul_blob(blob);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "ok");
    }
}
